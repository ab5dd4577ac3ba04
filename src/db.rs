use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use chrono::Utc;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, EntityTrait, Schema, Set};
use url::Url;

use crate::entities::storage_slot;
use crate::error::AppError;

pub fn resolve_db_path(data_dir: &Path) -> PathBuf {
    data_dir.join("studyflow.db")
}

pub fn ensure_parent_dir(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

pub fn open_lock(path: &Path) -> Result<fd_lock::RwLock<File>, AppError> {
    let lock_path = path.with_extension("lock");
    let file = OpenOptions::new()
        .create(true)
        .truncate(false)
        .read(true)
        .write(true)
        .open(lock_path)?;
    Ok(fd_lock::RwLock::new(file))
}

pub async fn connect(path: &Path) -> Result<DatabaseConnection, AppError> {
    let mut url = Url::from_file_path(path)
        .map_err(|_| AppError::InvalidInput(format!("invalid sqlite path: {}", path.display())))?;
    url.set_query(Some("mode=rwc"));
    let sqlite_url = url.as_str().replacen("file://", "sqlite://", 1);
    Ok(Database::connect(&sqlite_url).await?)
}

pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), AppError> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut slot_stmt = schema.create_table_from_entity(storage_slot::Entity);
    slot_stmt.if_not_exists();
    db.execute(builder.build(&slot_stmt)).await?;

    Ok(())
}

pub async fn load_slot<C: ConnectionTrait>(db: &C, slot: &str) -> Result<Option<String>, AppError> {
    let row = storage_slot::Entity::find_by_id(slot.to_string())
        .one(db)
        .await?;
    Ok(row.map(|model| model.value))
}

/// Replaces the whole slot content in one statement.
pub async fn save_slot<C: ConnectionTrait>(db: &C, slot: &str, value: &str) -> Result<(), AppError> {
    let active = storage_slot::ActiveModel {
        slot: Set(slot.to_string()),
        value: Set(value.to_string()),
        updated_at: Set(Utc::now()),
    };
    storage_slot::Entity::insert(active)
        .on_conflict(
            OnConflict::column(storage_slot::Column::Slot)
                .update_columns([storage_slot::Column::Value, storage_slot::Column::UpdatedAt])
                .to_owned(),
        )
        .exec_without_returning(db)
        .await?;
    Ok(())
}

pub async fn delete_slot<C: ConnectionTrait>(db: &C, slot: &str) -> Result<(), AppError> {
    storage_slot::Entity::delete_by_id(slot.to_string())
        .exec(db)
        .await?;
    Ok(())
}
