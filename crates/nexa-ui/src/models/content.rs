//! Static page content
//!
//! Every section renders one of these `'static` tables. Nothing here changes
//! after startup.

use crate::components::icons::Icon;

/// Anchor for the assessment form, target of every call to action
pub const ASSESSMENT_ANCHOR: &str = "#assessment";
/// Anchor for the case studies section
pub const CASE_STUDIES_ANCHOR: &str = "#case-studies";

/// A header navigation entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub name: &'static str,
    pub href: &'static str,
}

pub const NAVIGATION: &[NavLink] = &[
    NavLink {
        name: "Methodology",
        href: "#methodology",
    },
    NavLink {
        name: "Services",
        href: "#services",
    },
    NavLink {
        name: "Case Studies",
        href: CASE_STUDIES_ANCHOR,
    },
];

/// Headline number shown under the trust bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrustStat {
    pub label: &'static str,
    pub icon: Icon,
}

pub const TRUSTED_BY: &[&str] = &[
    "Apex Properties",
    "Urban Living",
    "Metro Portfolio",
    "Summit Mgmt",
    "Keystone Groups",
];

pub const TRUST_STATS: &[TrustStat] = &[
    TrustStat {
        label: "4.9/5 Satisfaction",
        icon: Icon::Star,
    },
    TrustStat {
        label: "92% Success Rate",
        icon: Icon::ShieldCheck,
    },
    TrustStat {
        label: "200+ Portfolios",
        icon: Icon::Users,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
    pub company: &'static str,
}

impl Testimonial {
    /// Letter shown in the avatar bubble
    pub fn initial(&self) -> char {
        self.author.chars().next().unwrap_or('?')
    }
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "Nexa Advisory completely transformed our operational workflow. We reduced vacancy rates by 40% within the first quarter.",
        author: "Sarah Jenkins",
        role: "VP of Operations",
        company: "Apex Properties",
    },
    Testimonial {
        quote: "The automation audit was an eye-opener. We didn't realize how much time we were wasting on manual data entry until Nexa showed us.",
        author: "Michael Ross",
        role: "Portfolio Manager",
        company: "Urban Living",
    },
    Testimonial {
        quote: "Professional, data-driven, and highly effective. Their team felt like an extension of ours during the implementation phase.",
        author: "Elena Rodriguez",
        role: "Director of Asset Management",
        company: "Metro Portfolio",
    },
];

/// Methodology card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueCard {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
}

pub const VALUE_CARDS: &[ValueCard] = &[
    ValueCard {
        title: "Workflow Mapping",
        description: "Uncover hidden inefficiencies draining 15-20% of team capacity.",
        icon: Icon::Settings,
    },
    ValueCard {
        title: "Automation Implementation",
        description: "Replace manual processes with systems that work 24/7.",
        icon: Icon::CheckCircle,
    },
    ValueCard {
        title: "ROI Optimization",
        description: "Turn operational savings into measurable profit growth.",
        icon: Icon::BarChart,
    },
];

/// One row of the sample audit output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuditRow {
    pub process: &'static str,
    pub cost: &'static str,
}

/// A numbered consulting offering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceOffering {
    pub number: u8,
    pub title: &'static str,
    pub description: &'static str,
    pub bullets: &'static [&'static str],
}

pub const SERVICES: &[ServiceOffering] = &[
    ServiceOffering {
        number: 1,
        title: "Operations Automation Audit",
        description: "The diagnostic that uncovers your hidden profit leaks. We analyze your current state across 8 key operational dimensions.",
        bullets: &[
            "Identify 12-18+ weekly hours of recoverable time",
            "Quantified ROI Projections (Base vs Aggressive)",
            "90-Day Implementation Roadmap",
        ],
    },
    ServiceOffering {
        number: 2,
        title: "Workflow Automation Execution",
        description: "From analysis to action. We integrate systems and deploy automations that handle the grunt work, so your team handles the tenants.",
        bullets: &[
            "System Integration & Tool Consolidation",
            "Workflow Automation Deployment",
            "Team Training & Change Management",
        ],
    },
];

pub const AUDIT_SAMPLE: &[AuditRow] = &[
    AuditRow {
        process: "Process: Lease Renewal",
        cost: "Manual (4hrs/wk)",
    },
    AuditRow {
        process: "Process: Maintenance Triage",
        cost: "Manual (12hrs/wk)",
    },
];

pub const AUDIT_SAVINGS: &str = "Potential Annual Savings: $25,400";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metric {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaseStudy {
    pub title: &'static str,
    pub headline: &'static str,
    pub results: &'static [Metric],
}

pub const CASE_STUDIES: &[CaseStudy] = &[
    CaseStudy {
        title: "175-Unit Portfolio",
        headline: "From Chaos to Control",
        results: &[
            Metric {
                label: "Maintenance Response",
                value: "7d → 2d",
            },
            Metric {
                label: "Tenant Inquiries",
                value: "-70%",
            },
            Metric {
                label: "Weekly Saved",
                value: "22 Hrs",
            },
        ],
    },
    CaseStudy {
        title: "280-Unit Operation",
        headline: "Scaling Without Headcount",
        results: &[
            Metric {
                label: "Capacity",
                value: "+35%",
            },
            Metric {
                label: "Error Reduction",
                value: "67%",
            },
            Metric {
                label: "Annual Savings",
                value: "$47k",
            },
        ],
    },
];

/// What the efficiency scorecard contains
pub const SCORECARD_BENEFITS: &[&str] = &[
    "Customized Efficiency Score (1-10)",
    "Industry Benchmark Comparison",
    "3 Improvement Opportunities",
];

/// Short names under the assessment form
pub const FORM_TRUST_MARKS: &[&str] = &["Apex", "Urban", "Metro", "Summit"];

pub const FOOTER_SERVICES: &[&str] = &[
    "Operations Audit",
    "Workflow Automation",
    "Fractional COO",
    "Team Training",
];

pub const OFFICE_LOCATION: &str = "New York, NY";

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_navigation_targets_are_anchors() {
        for link in NAVIGATION {
            assert!(link.href.starts_with('#'), "{} is not an anchor", link.href);
            assert!(link.href.len() > 1);
        }
    }

    #[test]
    fn test_navigation_targets_unique() {
        let hrefs: HashSet<_> = NAVIGATION.iter().map(|l| l.href).collect();
        assert_eq!(hrefs.len(), NAVIGATION.len());
        assert!(!hrefs.contains(ASSESSMENT_ANCHOR));
    }

    #[test]
    fn test_testimonial_initials() {
        let initials: Vec<char> = TESTIMONIALS.iter().map(Testimonial::initial).collect();
        assert_eq!(initials, vec!['S', 'M', 'E']);
    }

    #[test]
    fn test_case_studies_have_three_metrics() {
        assert_eq!(CASE_STUDIES.len(), 2);
        for study in CASE_STUDIES {
            assert_eq!(study.results.len(), 3, "{}", study.title);
        }
    }

    #[test]
    fn test_services_numbered_in_order() {
        let numbers: Vec<u8> = SERVICES.iter().map(|s| s.number).collect();
        assert_eq!(numbers, vec![1, 2]);
        assert!(SERVICES.iter().all(|s| s.bullets.len() == 3));
    }
}
