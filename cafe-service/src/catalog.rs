//! City catalog.
//!
//! Read-only mapping from city name to its ordered list of cafés. Built once
//! at startup and shared by all requests through an `Arc`.

use std::collections::HashMap;
use std::path::Path;

use common::errors::{AppError, AppResult};

/// Ordered café lists keyed by city name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityCatalog {
    cities: HashMap<String, Vec<String>>,
}

impl CityCatalog {
    /// The compiled-in dataset.
    pub fn builtin() -> Self {
        let entries: [(&str, &[&str]); 2] = [
            (
                "moscow",
                &[
                    "Мир кофе",
                    "Сладкоежка",
                    "Кофе и завтраки",
                    "Сытый студент",
                    "Вилка и ложка",
                ],
            ),
            ("tula", &["Самовар", "Пряничный дом", "Оружейная"]),
        ];

        let cities = entries
            .iter()
            .map(|(city, cafes)| {
                (
                    city.to_string(),
                    cafes.iter().map(|name| name.to_string()).collect(),
                )
            })
            .collect();

        Self { cities }
    }

    /// Parses a catalog from a JSON object of `city -> [cafe, ...]`.
    pub fn from_json_str(json: &str) -> AppResult<Self> {
        let cities: HashMap<String, Vec<String>> = serde_json::from_str(json)
            .map_err(|e| AppError::Catalog(format!("invalid catalog JSON: {}", e)))?;

        if cities.keys().any(|city| city.is_empty()) {
            return Err(AppError::Catalog("city name must not be empty".to_string()));
        }

        Ok(Self { cities })
    }

    /// Loads a catalog from a JSON file.
    pub fn from_file(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            AppError::Catalog(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_json_str(&content)
    }

    /// Cafés of `city` in catalog order. Lookup is case-sensitive.
    pub fn cafes(&self, city: &str) -> Option<&[String]> {
        self.cities.get(city).map(Vec::as_slice)
    }

    /// Sorted city names.
    pub fn cities(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.cities.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of cities.
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}
