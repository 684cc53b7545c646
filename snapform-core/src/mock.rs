/*
    Snap-form - form builder prototype
    Copyright (C) 2025 OpenLabs

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU Affero General Public License as published
    by the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.
*/

//! Hard-coded data behind the dashboard, pricing and public form pages.

use crate::builder::FormMeta;
use crate::field::{FieldDefinition, FieldId, FieldKind};
use crate::list::FieldList;

pub const COLLAPSED_FORM_COUNT: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct FormSummary {
    pub id: String,
    pub title: String,
    pub updated_at: &'static str,
}

impl FormSummary {
    pub fn view_path(&self) -> String {
        format!("/form/{}", self.id)
    }

    pub fn edit_path(&self) -> String {
        format!("/edit/{}", self.id)
    }

    pub fn analytics_path(&self) -> String {
        format!("/form/{}/analytics", self.id)
    }
}

pub fn forms() -> Vec<FormSummary> {
    (1..=10)
        .map(|i| FormSummary {
            id: format!("form-{}", i),
            title: format!("Customer Feedback {}", i),
            updated_at: "Sep 10, 2025",
        })
        .collect()
}

/// The dashboard shows the first few forms until "See All" is pressed.
pub fn visible_forms(forms: &[FormSummary], show_all: bool) -> &[FormSummary] {
    if show_all {
        forms
    } else {
        &forms[..forms.len().min(COLLAPSED_FORM_COUNT)]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    pub id: &'static str,
    pub title: &'static str,
}

pub const TEMPLATES: [Template; 4] = [
    Template { id: "t1", title: "Contact" },
    Template { id: "t2", title: "Feedback" },
    Template { id: "t3", title: "Job Application" },
    Template { id: "t4", title: "Survey" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TierEmphasis {
    Primary,
    Secondary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingTier {
    pub name: &'static str,
    pub price: &'static str,
    pub features: [&'static str; 3],
    pub cta: &'static str,
    pub emphasis: TierEmphasis,
}

pub const TIERS: [PricingTier; 3] = [
    PricingTier {
        name: "Free",
        price: "$0",
        features: ["Up to 3 forms", "Basic analytics", "Community support"],
        cta: "Choose Free",
        emphasis: TierEmphasis::Secondary,
    },
    PricingTier {
        name: "Premium",
        price: "$12/mo",
        features: ["Unlimited forms", "Advanced analytics", "Priority support"],
        cta: "Choose Premium",
        emphasis: TierEmphasis::Primary,
    },
    PricingTier {
        name: "Business",
        price: "$29/mo",
        features: ["Team workspaces", "Export & PDF", "SLA & SSO (mock)"],
        cta: "Choose Business",
        emphasis: TierEmphasis::Secondary,
    },
];

/// The respondent-facing form shown at `/form/:id`.
pub fn public_form() -> (FormMeta, FieldList) {
    let meta = FormMeta {
        title: "Customer Feedback".to_string(),
        cover_url: String::new(),
        icon: String::new(),
        description: "We value your thoughts. This is a mock public form.".to_string(),
        require_email: false,
    };
    let fields = FieldList::new(vec![
        FieldDefinition::new(FieldId::new("p-1"), FieldKind::ShortText).with_label("Your Name"),
        FieldDefinition::new(FieldId::new("p-2"), FieldKind::ShortText).with_label("Email (optional)"),
        FieldDefinition::new(FieldId::new("p-3"), FieldKind::LongText).with_label("Message"),
    ]);
    (meta, fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashboard_collapses_to_five() {
        let all = forms();
        assert_eq!(all.len(), 10);
        assert_eq!(visible_forms(&all, false).len(), 5);
        assert_eq!(visible_forms(&all, true).len(), 10);
        assert_eq!(visible_forms(&all[..2], false).len(), 2);
    }

    #[test]
    fn form_links() {
        let form = &forms()[2];
        assert_eq!(form.title, "Customer Feedback 3");
        assert_eq!(form.view_path(), "/form/form-3");
        assert_eq!(form.edit_path(), "/edit/form-3");
        assert_eq!(form.analytics_path(), "/form/form-3/analytics");
    }

    #[test]
    fn one_primary_tier() {
        let primary: Vec<_> = TIERS.iter().filter(|t| t.emphasis == TierEmphasis::Primary).collect();
        assert_eq!(primary.len(), 1);
        assert_eq!(primary[0].name, "Premium");
    }
}
