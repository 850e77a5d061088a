use serde::{ Serialize, Deserialize, Deserializer };
use serde::de::Error as DeError;
use serde_json::Value as JsonValue;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    #[serde(deserialize_with = "lenient_int")]
    pub id: i64,
    pub name: String,
    pub owner: String,
    #[serde(deserialize_with = "lenient_int")]
    pub start_day: i64,
    #[serde(deserialize_with = "lenient_int")]
    pub duration: i64,
    /// Ids of tasks that must finish first. Not checked against `tasks`.
    #[serde(default, deserialize_with = "lenient_int_list")]
    pub dependencies: Vec<i64>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectPlan {
    pub project_name: String,
    #[serde(deserialize_with = "lenient_int")]
    pub total_duration: i64,
    pub tasks: Vec<Task>,
}

/// Models sometimes write `14.0` or `"14"` where an integer is asked for.
/// Whole-valued floats and numeric strings are accepted; fractions are not.
fn coerce_int(value: &JsonValue) -> Result<i64, String> {
    match value {
        JsonValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Ok(i);
            }
            match n.as_f64() {
                Some(f) => whole_float(f).ok_or_else(|| format!("expected an integer, got {}", n)),
                None => Err(format!("integer out of range: {}", n)),
            }
        }
        JsonValue::String(s) => {
            let trimmed = s.trim();
            if let Ok(i) = trimmed.parse::<i64>() {
                return Ok(i);
            }
            trimmed
                .parse::<f64>()
                .ok()
                .and_then(whole_float)
                .ok_or_else(|| format!("expected an integer, got string {:?}", s))
        }
        other => Err(format!("expected an integer, got {}", other)),
    }
}

fn whole_float(f: f64) -> Option<i64> {
    if f.is_finite() && f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

fn lenient_int<'de, D>(deserializer: D) -> Result<i64, D::Error> where D: Deserializer<'de> {
    let value = JsonValue::deserialize(deserializer)?;
    coerce_int(&value).map_err(D::Error::custom)
}

fn lenient_int_list<'de, D>(deserializer: D) -> Result<Vec<i64>, D::Error>
    where D: Deserializer<'de>
{
    let values = Vec::<JsonValue>::deserialize(deserializer)?;
    values
        .iter()
        .map(|v| coerce_int(v).map_err(D::Error::custom))
        .collect()
}
