//! CLI argument definitions using clap derive

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "fitrkr-seed")]
#[command(author, version, about = "Bulk-load exercise catalog data into SQLite")]
#[command(long_about = "An interactive menu for uploading muscle groups, exercise types, \
categories, equipment and exercises from CSV, JSON or YAML files.

The database is taken from DB_CONN_STRING (or db_conn_string in fitrkr.yaml). \
Upload files are listed from ./data unless FITRKR_DATA_DIR says otherwise.")]
pub struct Cli {}
