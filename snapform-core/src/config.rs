/*
    Snap-form - form builder prototype
    Copyright (C) 2025 OpenLabs

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU Affero General Public License as published
    by the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.
*/

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub brand: String,
    pub short_link: String,
    pub mock_form_id: String,
    pub toast_duration_ms: u32,
    pub footer_owner: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            brand: "Snap-form".to_string(),
            short_link: "https://snap-form.app/s/mock-123".to_string(),
            mock_form_id: "mock-123".to_string(),
            toast_duration_ms: 3000,
            footer_owner: "OpenLabs".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }
}
