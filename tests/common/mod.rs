#![allow(dead_code)]

use std::time::{SystemTime, UNIX_EPOCH};

use cardmate::model::course::{Course, CourseLayout, Hole};
use cardmate::model::database_write::{TABLES_AND_DDL, execute_batch_sql};
use sql_middleware::SqlMiddlewareDbError;
use sql_middleware::middleware::ConfigAndPool;

pub struct TestContext {
    pub config_and_pool: ConfigAndPool,
}

pub async fn setup_test_context() -> Result<TestContext, SqlMiddlewareDbError> {
    let db_name = format!(
        "file:test_db_{}?mode=memory&cache=shared",
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time went backwards")
            .as_nanos()
    );

    let config_and_pool = ConfigAndPool::new_sqlite(db_name).await?;

    let schema = TABLES_AND_DDL
        .iter()
        .map(|(_, ddl)| *ddl)
        .collect::<Vec<_>>()
        .join("\n");
    execute_batch_sql(&config_and_pool, &schema).await?;

    Ok(TestContext { config_and_pool })
}

/// Nine-hole course whose first three holes carry the pars most tests lean
/// on (3, 3, 4); the rest stay at the default par 3.
pub fn nine_hole_course(course_id: &str) -> Course {
    let mut course = Course::new(
        course_id.to_string(),
        "Cedar Hills".to_string(),
        CourseLayout::Nine,
    );
    course.holes[2].par = 4;
    course
}

pub fn three_holes() -> Vec<Hole> {
    vec![
        Hole {
            number: 1,
            par: 3,
            distance: 250,
            notes: String::new(),
        },
        Hole {
            number: 2,
            par: 3,
            distance: 310,
            notes: String::new(),
        },
        Hole {
            number: 3,
            par: 4,
            distance: 420,
            notes: String::new(),
        },
    ]
}
