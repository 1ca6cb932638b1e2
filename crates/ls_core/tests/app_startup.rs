use ls_core::db::open_db;
use ls_core::{run_startup, AppConfig, DbLocation, ProjectRepository, SqliteProjectRepository};
use rusqlite::Connection;

fn config_for(db: DbLocation, dir: &std::path::Path) -> AppConfig {
    AppConfig {
        db,
        log_level: "info".to_string(),
        log_dir: dir.join("logs"),
    }
}

#[test]
fn startup_seeds_a_file_backed_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ls_app.db");

    run_startup(&config_for(DbLocation::File(path.clone()), dir.path())).unwrap();

    let conn = open_db(&path).unwrap();
    let names: Vec<String> = SqliteProjectRepository::new(&conn)
        .find_all()
        .unwrap()
        .into_iter()
        .map(|project| project.name)
        .collect();
    assert_eq!(names, vec!["P1", "P2", "P3"]);
}

#[test]
fn startup_succeeds_against_in_memory_store() {
    let dir = tempfile::tempdir().unwrap();

    run_startup(&config_for(DbLocation::Memory, dir.path())).unwrap();
}

#[test]
fn startup_fails_before_seeding_when_schema_is_too_new() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");
    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    let err = run_startup(&config_for(DbLocation::File(path), dir.path())).unwrap_err();
    assert!(matches!(err, ls_core::StartupError::Db(_)));
}

#[test]
fn startup_surfaces_repository_failures() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.db");
    drop(open_db(&path).unwrap());

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("DROP TABLE projects;").unwrap();
    drop(conn);

    let err = run_startup(&config_for(DbLocation::File(path), dir.path())).unwrap_err();
    assert!(matches!(err, ls_core::StartupError::Repo(_)));
}
