use reqwest::Client;
use serde::Deserialize;

/// Where the course database lives and the key that unlocks it.
#[derive(Debug, Clone)]
pub struct LookupConfig {
    pub base_url: String,
    pub api_key: String,
}

#[derive(Deserialize, Clone, Debug)]
pub struct LookupCourse {
    pub course_id: String,
    pub name: String,
    pub holes: i64,
    #[serde(default)]
    pub rating: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub holes_data: Option<Vec<LookupHole>>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct LookupHole {
    pub hole_num: i64,
    pub length: f64,
    pub par: i64,
}

/// # Errors
///
/// Will return `Err` if the course database call fails or answers non-2xx
pub async fn search_courses(
    config: &LookupConfig,
    keyword: &str,
) -> Result<Vec<LookupCourse>, reqwest::Error> {
    let client = Client::new();
    let url = format!("{}/course.php", config.base_url);

    let resp = client
        .get(&url)
        .query(&[
            ("key", config.api_key.as_str()),
            ("mode", "name"),
            ("keyword", keyword),
        ])
        .send()
        .await?
        .error_for_status()?;

    resp.json().await
}

/// # Errors
///
/// Will return `Err` if the course database call fails or answers non-2xx
pub async fn get_course_details(
    config: &LookupConfig,
    course_id: &str,
) -> Result<LookupCourse, reqwest::Error> {
    let client = Client::new();
    let url = format!("{}/course_details.php", config.base_url);

    let resp = client
        .get(&url)
        .query(&[
            ("key", config.api_key.as_str()),
            ("course_id", course_id),
        ])
        .send()
        .await?
        .error_for_status()?;

    resp.json().await
}
