use serde_json::Value;
use std::{fs, path::PathBuf};

/// # Errors
///
/// Will return `Err` if the file is not readable
pub fn check_readable_file(file: &str) -> Result<String, String> {
    // split by semi-colon
    let files = file.split(';');
    for file in files {
        let path = PathBuf::from(file);
        if !path.is_file() || fs::metadata(&path).is_err() {
            return Err(format!("The sql startup script '{file}' is not readable."));
        }
    }
    Ok(file.to_string())
}

/// # Errors
///
/// Will return `Err` if the file is not readable or is not valid json
pub fn check_readable_file_and_json(file: &str) -> Result<Value, String> {
    let path = PathBuf::from(file);
    if !path.is_file() || fs::metadata(&path).is_err() {
        return Err(format!("The json file '{file}' is not readable."));
    }
    let contents =
        fs::read_to_string(&path).map_err(|e| format!("The json file '{file}' is not readable: {e}"))?;
    let json: Value =
        serde_json::from_str(&contents).map_err(|e| format!("The json file '{file}' is not valid json: {e}"))?;
    validate_json_format(&json)?;
    Ok(json)
}

/// Validate the json file format
/// format we expect is this:
/// [{ "profile": "<owner id>", "name": "Display Name"
/// , "players": ["Player One", "Player Two", ...]
/// , "courses": [{"name": "Course Name", "layout": <9 or 18>}, ...]
/// }]
///
/// # Errors
///
/// Will return `Err` if the json is not in the correct format
fn validate_json_format(json: &Value) -> Result<(), String> {
    let Some(entries) = json.as_array() else {
        return Err("The json file is not in the correct format.".to_string());
    };

    let expected_keys = ["profile", "name", "players", "courses"];
    for element in entries {
        let Some(obj) = element.as_object() else {
            return Err("The json file is not in the correct format. Expected objects.".to_string());
        };
        for key in obj.keys() {
            if !expected_keys.contains(&key.as_str()) {
                return Err(format!(
                    "The json file is not in the correct format. Expected keys: {expected_keys:?}"
                ));
            }
        }

        if !element["profile"].is_string() {
            return Err(
                "The json key profile is not in the correct format. Expected a string.".to_string(),
            );
        }
        if !element["name"].is_string() {
            return Err(
                "The json key name is not in the correct format. Expected a string.".to_string(),
            );
        }

        let players = element["players"]
            .as_array()
            .ok_or_else(|| "The json key players is not in the correct format. Expected an array.".to_string())?;
        for player in players {
            if !player.is_string() {
                return Err(
                    "The json key players is not in the correct format. Expected strings."
                        .to_string(),
                );
            }
        }

        let courses = element["courses"]
            .as_array()
            .ok_or_else(|| "The json key courses is not in the correct format. Expected an array.".to_string())?;
        for course in courses {
            if !course.is_object() {
                return Err(
                    "The json key courses is not in the correct format. Expected objects."
                        .to_string(),
                );
            }
            if !course["name"].is_string() || !course["layout"].is_number() {
                return Err(
                    "The json key courses is not in the correct format. Expected objects with keys name and layout.".to_string()
                );
            }
        }
    }

    Ok(())
}
