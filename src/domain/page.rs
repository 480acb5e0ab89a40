// Page registry - the fixed, ordered set of dashboard views
use super::error::DomainError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    #[default]
    Activities,
    Billing,
    Customers,
    Vendors,
    PayrollHr,
    Financial,
    Reports,
    Analytics,
    Documents,
    Setup,
    ExecutiveManagement,
    Sales,
    CustomerHierarchy,
    InventoryManagement,
}

/// Where a page is reachable from in the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    /// Top navigation bar
    Main,
    /// Sidebar "Navigation Shortcut Group"
    Shortcut,
}

impl Page {
    pub const ALL: [Page; 14] = [
        Page::Activities,
        Page::Billing,
        Page::Customers,
        Page::Vendors,
        Page::PayrollHr,
        Page::Financial,
        Page::Reports,
        Page::Analytics,
        Page::Documents,
        Page::Setup,
        Page::ExecutiveManagement,
        Page::Sales,
        Page::CustomerHierarchy,
        Page::InventoryManagement,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Page::Activities => "Activities",
            Page::Billing => "Billing",
            Page::Customers => "Customers",
            Page::Vendors => "Vendors",
            Page::PayrollHr => "Payroll & HR",
            Page::Financial => "Financial",
            Page::Reports => "Reports",
            Page::Analytics => "Analytics",
            Page::Documents => "Documents",
            Page::Setup => "Setup",
            Page::ExecutiveManagement => "Executive Management",
            Page::Sales => "Sales",
            Page::CustomerHierarchy => "Customer Hierarchy",
            Page::InventoryManagement => "Inventory Management",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Page::Activities => "activities",
            Page::Billing => "billing",
            Page::Customers => "customers",
            Page::Vendors => "vendors",
            Page::PayrollHr => "payroll-hr",
            Page::Financial => "financial",
            Page::Reports => "reports",
            Page::Analytics => "analytics",
            Page::Documents => "documents",
            Page::Setup => "setup",
            Page::ExecutiveManagement => "executive-management",
            Page::Sales => "sales",
            Page::CustomerHierarchy => "customer-hierarchy",
            Page::InventoryManagement => "inventory-management",
        }
    }

    pub fn section(self) -> Section {
        match self {
            Page::ExecutiveManagement
            | Page::Sales
            | Page::CustomerHierarchy
            | Page::InventoryManagement => Section::Shortcut,
            _ => Section::Main,
        }
    }

    /// Position in the registry, stable for the lifetime of the binary.
    pub fn index(self) -> usize {
        Page::ALL
            .iter()
            .position(|p| *p == self)
            .unwrap_or_default()
    }

    /// Resolve a page from its slug or display title, ignoring case.
    pub fn from_slug(name: &str) -> Result<Page, DomainError> {
        let name = name.trim();
        Page::ALL
            .into_iter()
            .find(|p| p.slug().eq_ignore_ascii_case(name) || p.title().eq_ignore_ascii_case(name))
            .or_else(|| {
                // Older layouts spelled it out
                name.eq_ignore_ascii_case("Payroll and HR")
                    .then_some(Page::PayrollHr)
            })
            .ok_or_else(|| DomainError::UnknownPage(name.to_string()))
    }

}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for Page {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Page::from_slug(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_first_page() {
        assert_eq!(Page::default(), Page::ALL[0]);
        assert_eq!(Page::default(), Page::Activities);
    }

    #[test]
    fn test_slug_and_title_round_trip() {
        for page in Page::ALL {
            assert_eq!(Page::from_slug(page.slug()), Ok(page));
            assert_eq!(page.title().parse::<Page>(), Ok(page));
        }
    }

    #[test]
    fn test_from_slug_accepts_legacy_and_mixed_case() {
        assert_eq!(Page::from_slug("Payroll and HR"), Ok(Page::PayrollHr));
        assert_eq!(Page::from_slug("FINANCIAL"), Ok(Page::Financial));
        assert_eq!(
            Page::from_slug("ledger"),
            Err(DomainError::UnknownPage("ledger".to_string()))
        );
    }

    #[test]
    fn test_sections() {
        let in_section = |section| {
            Page::ALL
                .into_iter()
                .filter(move |p| p.section() == section)
                .collect::<Vec<_>>()
        };
        assert_eq!(in_section(Section::Main).len(), 10);
        let shortcuts = in_section(Section::Shortcut);
        assert_eq!(
            shortcuts,
            vec![
                Page::ExecutiveManagement,
                Page::Sales,
                Page::CustomerHierarchy,
                Page::InventoryManagement
            ]
        );
    }

    #[test]
    fn test_serde_uses_slug() {
        assert_eq!(
            serde_json::to_string(&Page::PayrollHr).unwrap(),
            "\"payroll-hr\""
        );
        assert_eq!(Page::InventoryManagement.index(), 13);
    }
}
