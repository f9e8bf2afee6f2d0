//! Write and lookup methods for the catalog

use rusqlite::{params, Connection, OptionalExtension};
use tracing::{debug, warn};

use super::{Catalog, CatalogError, ExerciseLinks, ExerciseUploadRow, Junction, NameTable};

impl Catalog {
    /// Insert each name with insert-or-ignore semantics, in input order
    ///
    /// Not transactional: on failure the names before the failing one stay
    /// committed and the error is returned.
    pub fn insert_names(&self, table: NameTable, names: &[String]) -> Result<usize, CatalogError> {
        let mut stmt = self.conn.prepare(table.insert_sql())?;
        for name in names {
            stmt.execute(params![name])?;
        }
        Ok(names.len())
    }

    /// Resolve the id of a dimension row, creating the row if needed
    pub fn get_or_insert(&self, table: NameTable, name: &str) -> Result<i64, CatalogError> {
        Ok(resolve_id(&self.conn, table, name)?)
    }

    /// Write a batch of exercises and their links in one transaction
    ///
    /// Any failure rolls back the whole batch.
    pub fn insert_exercises(&mut self, rows: &[ExerciseUploadRow]) -> Result<usize, CatalogError> {
        let tx = self.conn.transaction()?;

        for (idx, row) in rows.iter().enumerate() {
            if let Err(e) = write_exercise(&tx, row) {
                warn!(row = idx + 1, exercise = %row.name, error = %e, "exercise batch rolled back");
                // Dropping the transaction rolls it back
                return Err(e);
            }
        }

        tx.commit()?;
        debug!(rows = rows.len(), "exercise batch committed");
        Ok(rows.len())
    }

    /// Look up an exercise with the names of everything linked to it
    pub fn exercise_links(&self, name: &str) -> Result<Option<ExerciseLinks>, CatalogError> {
        let head: Option<(i64, String, String)> = self
            .conn
            .query_row(
                "SELECT e.id, e.description, c.name
                 FROM exercise e JOIN exercise_category c ON c.id = e.category_id
                 WHERE e.name = ?1",
                params![name],
                |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
            )
            .optional()?;

        let Some((id, description, category)) = head else {
            return Ok(None);
        };

        Ok(Some(ExerciseLinks {
            category,
            description,
            equipment: self.linked_names(
                "SELECT d.name FROM exercise_equipment j JOIN equipment d ON d.id = j.equipment_id
                 WHERE j.exercise_id = ?1 ORDER BY d.name",
                id,
            )?,
            types: self.linked_names(
                "SELECT d.name FROM exercise_training_types j JOIN training_type d ON d.id = j.training_type_id
                 WHERE j.exercise_id = ?1 ORDER BY d.name",
                id,
            )?,
            muscles: self.linked_names(
                "SELECT d.name FROM exercise_muscles j JOIN muscle_group d ON d.id = j.muscle_group_id
                 WHERE j.exercise_id = ?1 ORDER BY d.name",
                id,
            )?,
        }))
    }

    fn linked_names(&self, sql: &str, exercise_id: i64) -> Result<Vec<String>, CatalogError> {
        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt.query_map(params![exercise_id], |row| row.get::<_, String>(0))?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }
}

/// Insert-or-touch a dimension row and return its id
fn resolve_id(conn: &Connection, table: NameTable, name: &str) -> rusqlite::Result<i64> {
    conn.query_row(table.get_or_insert_sql(), params![name], |row| row.get(0))
}

/// Write one exercise: category, the exercise row, then each junction list
fn write_exercise(conn: &Connection, row: &ExerciseUploadRow) -> Result<(), CatalogError> {
    let category_id =
        resolve_id(conn, NameTable::Category, &row.category).map_err(|source| {
            CatalogError::Category {
                name: row.category.clone(),
                source,
            }
        })?;

    let exercise_id: i64 = conn
        .query_row(
            "INSERT INTO exercise (name, description, category_id)
             VALUES (?1, ?2, ?3)
             ON CONFLICT (name) DO UPDATE SET description = excluded.description
             RETURNING id",
            params![row.name, row.description, category_id],
            |r| r.get(0),
        )
        .map_err(|source| CatalogError::Exercise {
            name: row.name.clone(),
            source,
        })?;

    link_all(conn, exercise_id, Junction::Equipment, &row.equipment)?;
    link_all(conn, exercise_id, Junction::TrainingType, &row.types)?;
    link_all(conn, exercise_id, Junction::Muscle, &row.muscles)?;

    Ok(())
}

/// Resolve every listed name and link it to the exercise
///
/// Blank items and the placeholder "none" (any case) are skipped.
fn link_all(
    conn: &Connection,
    exercise_id: i64,
    junction: Junction,
    items: &[String],
) -> Result<(), CatalogError> {
    for item in items {
        let item = item.trim();
        if item.is_empty() || item.eq_ignore_ascii_case("none") {
            continue;
        }

        let target_id =
            resolve_id(conn, junction.target(), item).map_err(|source| CatalogError::Dimension {
                label: junction.label(),
                name: item.to_string(),
                source,
            })?;

        conn.execute(junction.insert_sql(), params![exercise_id, target_id])
            .map_err(|source| CatalogError::Junction {
                label: junction.label(),
                source,
            })?;
    }

    Ok(())
}
