//! Section identities: names, emit order and how their rules are built.

use crate::tokenize::Depth;

/// Every section the generator knows how to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Level1Folders,
    Level2Folders,
    Subdomains,
    ParameterKeys,
    ParameterUsage,
    NoOfParameters,
    NoOfFolders,
    Sfcc,
    Shopify,
    StaticResources,
}

impl SectionKind {
    /// Name written in `[segment:<name>]` and the end-of-section comment.
    pub const fn name(self) -> &'static str {
        match self {
            SectionKind::Level1Folders => "sl_level1_Folders",
            SectionKind::Level2Folders => "sl_level2_Folders",
            SectionKind::Subdomains => "sl_subdomains",
            SectionKind::ParameterKeys => "sl_parameter_Keys",
            SectionKind::ParameterUsage => "sl_parameter_Usage",
            SectionKind::NoOfParameters => "sl_no_Of_Parameters",
            SectionKind::NoOfFolders => "sl_no_Of_Folders",
            SectionKind::Sfcc => "sl_sfcc",
            SectionKind::Shopify => "sl_shopify",
            SectionKind::StaticResources => "sl_static_Resources",
        }
    }

    /// One-line description for console output.
    pub const fn description(self) -> &'static str {
        match self {
            SectionKind::Level1Folders => "Regex for all first level folders.",
            SectionKind::Level2Folders => "Regex for all second level folders.",
            SectionKind::Subdomains => "Regex for subdomains.",
            SectionKind::ParameterKeys => "Regex for each parameter key in use.",
            SectionKind::ParameterUsage => "Regex for pages with/without parameters.",
            SectionKind::NoOfParameters => "Regex for number of parameters on the URL.",
            SectionKind::NoOfFolders => "Regex for number of folders on the URL.",
            SectionKind::Sfcc => "Regex for Salesforce Commerce Cloud (Demandware).",
            SectionKind::Shopify => "Regex for Shopify products, collections and pages.",
            SectionKind::StaticResources => "Regex for static resources.",
        }
    }

    /// Folder depth for URL-prefix sections.
    pub const fn depth(self) -> Option<Depth> {
        match self {
            SectionKind::Level1Folders => Some(Depth::Level1),
            SectionKind::Level2Folders => Some(Depth::Level2),
            SectionKind::Subdomains => Some(Depth::Host),
            _ => None,
        }
    }

    /// Sections built from a tally of the input.
    pub const fn is_data_driven(self) -> bool {
        matches!(
            self,
            SectionKind::Level1Folders
                | SectionKind::Level2Folders
                | SectionKind::Subdomains
                | SectionKind::ParameterKeys
        )
    }

    /// Folder sections honour the folder-size threshold; others keep every key.
    pub const fn is_folder_section(self) -> bool {
        matches!(self, SectionKind::Level1Folders | SectionKind::Level2Folders)
    }
}

/// Which optional sections to emit on top of the default six.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SectionPlan {
    pub parameter_keys: bool,
    pub platform_sections: bool,
    pub static_resources: bool,
}

impl SectionPlan {
    /// Data-driven sections, in emit order.
    pub fn data_sections(&self) -> Vec<SectionKind> {
        let mut out = vec![
            SectionKind::Level1Folders,
            SectionKind::Level2Folders,
            SectionKind::Subdomains,
        ];
        if self.parameter_keys {
            out.push(SectionKind::ParameterKeys);
        }
        out
    }

    /// Static sections, in emit order. Platform sections are only included when
    /// enabled and their platform was seen in the input.
    pub fn static_sections(&self, sfcc_seen: bool, shopify_seen: bool) -> Vec<SectionKind> {
        let mut out = vec![
            SectionKind::ParameterUsage,
            SectionKind::NoOfParameters,
            SectionKind::NoOfFolders,
        ];
        if self.platform_sections && sfcc_seen {
            out.push(SectionKind::Sfcc);
        }
        if self.platform_sections && shopify_seen {
            out.push(SectionKind::Shopify);
        }
        if self.static_resources {
            out.push(SectionKind::StaticResources);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_plan_is_six_sections_in_order() {
        let plan = SectionPlan::default();
        let names: Vec<_> = plan
            .data_sections()
            .into_iter()
            .chain(plan.static_sections(true, true))
            .map(SectionKind::name)
            .collect();
        assert_eq!(
            names,
            vec![
                "sl_level1_Folders",
                "sl_level2_Folders",
                "sl_subdomains",
                "sl_parameter_Usage",
                "sl_no_Of_Parameters",
                "sl_no_Of_Folders",
            ]
        );
    }

    #[test]
    fn optional_sections_follow_builtins() {
        let plan = SectionPlan {
            parameter_keys: true,
            platform_sections: true,
            static_resources: true,
        };
        assert_eq!(plan.data_sections().last(), Some(&SectionKind::ParameterKeys));
        assert_eq!(
            plan.static_sections(false, true),
            vec![
                SectionKind::ParameterUsage,
                SectionKind::NoOfParameters,
                SectionKind::NoOfFolders,
                SectionKind::Shopify,
                SectionKind::StaticResources,
            ]
        );
    }

    #[test]
    fn data_driven_flags() {
        assert!(SectionKind::Subdomains.is_data_driven());
        assert!(!SectionKind::NoOfFolders.is_data_driven());
        assert!(SectionKind::Level2Folders.is_folder_section());
        assert!(!SectionKind::Subdomains.is_folder_section());
        assert_eq!(SectionKind::Subdomains.depth(), Some(Depth::Host));
        assert_eq!(SectionKind::ParameterKeys.depth(), None);
    }
}
