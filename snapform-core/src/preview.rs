/*
    Snap-form - form builder prototype
    Copyright (C) 2025 OpenLabs

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU Affero General Public License as published
    by the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.
*/

/// How a field of a given kind is drawn. The canvas, the preview tab and the
/// public form all render from this one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewRule {
    SingleLine { placeholder: &'static str },
    MultiLine { placeholder: &'static str },
    MockOptions { options: [&'static str; 2] },
    DashedBox { caption: &'static str, tall: bool },
    Separator { padded: bool },
}

impl PreviewRule {
    /// True for rules that draw an input the respondent could type into.
    pub fn is_input(&self) -> bool {
        matches!(self, PreviewRule::SingleLine { .. } | PreviewRule::MultiLine { .. })
    }

    /// Short text summary, used by logs and the plain-text fallback.
    pub fn describe(&self) -> String {
        match self {
            PreviewRule::SingleLine { placeholder } => format!("[{}]", placeholder),
            PreviewRule::MultiLine { placeholder } => format!("[[{}]]", placeholder),
            PreviewRule::MockOptions { options } => options.join(" / "),
            PreviewRule::DashedBox { caption, .. } => format!("<{}>", caption),
            PreviewRule::Separator { .. } => "---".to_string(),
        }
    }
}
