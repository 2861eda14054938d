mod common;

#[test]
fn test_creates_migrated_db_file() {
    let test_db = common::TestDb::new("test_creates_migrated_db_file.db");
    let conn = test_db.pool().get();
    assert!(conn.is_ok());
    assert!(test_db.path_exists("test_creates_migrated_db_file.db"));
}
