//! Current-weather response model (OpenWeatherMap `data/2.5/weather`).
//!
//! The service reports `cod` as a number on success and as a string on
//! failure (`{"cod":"404","message":"city not found"}`), so both are accepted.

use crate::error::{KitError, Result};
use serde::Deserialize;
use url::Url;

const ENDPOINT: &str = "http://api.openweathermap.org/data/2.5/weather";
const FALLBACK_ERROR: &str = "Unable to get weather.";

/// Status code as sent by the service.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum StatusCode {
    Number(u16),
    Text(String),
}

impl StatusCode {
    pub fn is_ok(&self) -> bool {
        match self {
            StatusCode::Number(code) => *code == 200,
            StatusCode::Text(code) => code.trim() == "200",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Condition {
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Readings {
    pub temp: Option<f64>,
    pub feels_like: Option<f64>,
    pub humidity: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Wind {
    pub speed: Option<f64>,
}

/// A current-weather response body.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WeatherResponse {
    pub cod: Option<StatusCode>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub weather: Vec<Condition>,
    #[serde(default)]
    pub main: Readings,
    #[serde(default)]
    pub wind: Wind,
}

impl WeatherResponse {
    pub fn parse(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Fail with the service's message unless `cod` is 200.
    pub fn into_success(self) -> Result<Self> {
        if self.cod.as_ref().is_some_and(StatusCode::is_ok) {
            return Ok(self);
        }
        Err(KitError::Service {
            service: "Weather".to_string(),
            message: self
                .message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| FALLBACK_ERROR.to_string()),
        })
    }

    /// Multi-line report for `city`.
    pub fn report(&self, city: &str) -> String {
        let description = self
            .weather
            .first()
            .and_then(|c| c.description.as_deref())
            .map(title_case)
            .unwrap_or_else(|| "Unknown".to_string());

        [
            format!("City: {}", city),
            format!("Weather: {}", description),
            format!("Temperature: {}°C", reading(self.main.temp)),
            format!("Feels Like: {}°C", reading(self.main.feels_like)),
            format!("Humidity: {}%", reading(self.main.humidity)),
            format!("Wind Speed: {} m/s", reading(self.wind.speed)),
        ]
        .join("\n")
    }
}

/// Request URL for the current weather in `city`, metric units.
pub fn request_url(city: &str, api_key: &str) -> Result<String> {
    let city = city.trim();
    if city.is_empty() {
        return Err(KitError::Invalid("Please enter a city name.".to_string()));
    }
    let url = Url::parse_with_params(
        ENDPOINT,
        &[("q", city), ("appid", api_key), ("units", "metric")],
    )?;
    Ok(url.into())
}

fn reading(value: Option<f64>) -> String {
    value.map_or_else(|| "N/A".to_string(), |v| v.to_string())
}

/// Capitalize the first letter of every word, lowercase the rest.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }
    out
}
