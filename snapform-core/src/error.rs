/*
    Snap-form - form builder prototype
    Copyright (C) 2025 OpenLabs

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU Affero General Public License as published
    by the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.
*/

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Unknown field kind: {0}")]
    UnknownFieldKind(String),

    #[error("Unknown analytics range: {0}")]
    UnknownRange(String),

    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}
