use serde::{Deserialize, Serialize};

use super::domain::{Employee, HiringRecord, View};

/// Whether descriptors only decorate the table or also narrow it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterMode {
    #[default]
    Tag,
    Predicate,
}

impl FilterMode {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "tag" | "tags" => Some(Self::Tag),
            "predicate" | "narrow" => Some(Self::Predicate),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterField {
    #[serde(rename = "Team")]
    Team,
    #[serde(rename = "Manager")]
    Manager,
    #[serde(rename = "Status")]
    Status,
    #[serde(rename = "Hiring Manager")]
    HiringManager,
}

impl FilterField {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Team => "Team",
            Self::Manager => "Manager",
            Self::Status => "Status",
            Self::HiringManager => "Hiring Manager",
        }
    }

    /// Fields offered by the filter dropdown for a view, in display order.
    pub const fn options_for(view: View) -> &'static [FilterField] {
        match view {
            View::Employees => &[Self::Team, Self::Manager],
            View::Hiring => &[Self::Team, Self::Status, Self::HiringManager],
        }
    }

    pub fn applies_to(self, view: View) -> bool {
        Self::options_for(view).contains(&self)
    }

    fn employee_value(self, employee: &Employee) -> Option<&str> {
        match self {
            Self::Team => Some(&employee.team_name),
            Self::Manager => Some(&employee.manager_name),
            Self::Status | Self::HiringManager => None,
        }
    }

    fn hiring_value(self, record: &HiringRecord) -> Option<&str> {
        match self {
            Self::Team => Some(&record.team),
            Self::Status => Some(record.status.label()),
            Self::HiringManager => Some(&record.hiring_manager),
            Self::Manager => None,
        }
    }
}

/// A removable "field - value" chip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterDescriptor {
    pub field: FilterField,
    pub value: String,
    pub label: String,
}

impl FilterDescriptor {
    fn new(field: FilterField, value: &str) -> Self {
        Self {
            field,
            value: value.to_string(),
            label: format!("{} - {}", field.label(), value),
        }
    }
}

/// Active descriptors for one view plus the staged dropdown/text-box state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSet {
    view: View,
    descriptors: Vec<FilterDescriptor>,
    selected_field: Option<FilterField>,
    draft_value: String,
}

impl FilterSet {
    pub fn new(view: View) -> Self {
        Self {
            view,
            descriptors: Vec::new(),
            selected_field: None,
            draft_value: String::new(),
        }
    }

    pub fn descriptors(&self) -> &[FilterDescriptor] {
        &self.descriptors
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.descriptors.iter().map(|descriptor| descriptor.label.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    pub fn selected_field(&self) -> Option<FilterField> {
        self.selected_field
    }

    pub fn draft_value(&self) -> &str {
        &self.draft_value
    }

    /// Stages a dropdown choice. `None` is the "Select" placeholder.
    pub fn select_field(&mut self, field: Option<FilterField>) -> bool {
        match field {
            Some(field) if !field.applies_to(self.view) => false,
            _ => {
                self.selected_field = field;
                true
            }
        }
    }

    pub fn set_draft_value(&mut self, value: impl Into<String>) {
        self.draft_value = value.into();
    }

    /// Adds `"{field} - {value}"`. Blank values, foreign fields and duplicates are ignored.
    pub fn add(&mut self, field: FilterField, value: &str) -> bool {
        let value = value.trim();
        if value.is_empty() || !field.applies_to(self.view) {
            return false;
        }

        let descriptor = FilterDescriptor::new(field, value);
        if self
            .descriptors
            .iter()
            .any(|existing| existing.label == descriptor.label)
        {
            return false;
        }

        self.descriptors.push(descriptor);
        self.draft_value.clear();
        true
    }

    /// Adds from the staged field and text box.
    pub fn submit(&mut self) -> bool {
        let Some(field) = self.selected_field else {
            return false;
        };
        let value = self.draft_value.clone();
        self.add(field, &value)
    }

    pub fn remove(&mut self, label: &str) -> bool {
        let before = self.descriptors.len();
        self.descriptors.retain(|descriptor| descriptor.label != label);
        self.descriptors.len() != before
    }

    pub fn reset(&mut self) {
        self.descriptors.clear();
        self.selected_field = None;
        self.draft_value.clear();
    }

    pub fn matches_employee(&self, employee: &Employee) -> bool {
        self.matches(|field| field.employee_value(employee))
    }

    pub fn matches_hiring(&self, record: &HiringRecord) -> bool {
        self.matches(|field| field.hiring_value(record))
    }

    // Same field: any descriptor may match. Different fields: all must match.
    fn matches<'r>(&self, value_of: impl Fn(FilterField) -> Option<&'r str>) -> bool {
        let mut fields: Vec<FilterField> = Vec::new();
        for descriptor in &self.descriptors {
            if !fields.contains(&descriptor.field) {
                fields.push(descriptor.field);
            }
        }

        fields.into_iter().all(|field| {
            let Some(actual) = value_of(field) else {
                return false;
            };
            let actual = actual.trim().to_lowercase();
            self.descriptors
                .iter()
                .filter(|descriptor| descriptor.field == field)
                .any(|descriptor| descriptor.value.to_lowercase() == actual)
        })
    }
}
