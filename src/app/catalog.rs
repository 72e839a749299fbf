//! Static catalog of prompting principles and their categories.
//!
//! The principle table is compiled in and ordered by id. The category table is
//! derived from it on first access, so every category count always matches the
//! principles that carry that category. [`verify_catalog`] re-checks those
//! invariants at start-up and is the only fallible operation in this module.

use anyhow::{bail, ensure, Result};
use once_cell::sync::Lazy;
use std::fmt;

/// Stable identifier of a principle, `1..=26` for the compiled-in catalog.
pub type PrincipleId = u32;

/// The five real categories a principle can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryKey {
    Structure,
    Clarity,
    Engagement,
    Execution,
    Motivation,
}

impl CategoryKey {
    pub const ALL: [CategoryKey; 5] = [
        CategoryKey::Structure,
        CategoryKey::Clarity,
        CategoryKey::Engagement,
        CategoryKey::Execution,
        CategoryKey::Motivation,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CategoryKey::Structure => "structure",
            CategoryKey::Clarity => "clarity",
            CategoryKey::Engagement => "engagement",
            CategoryKey::Execution => "execution",
            CategoryKey::Motivation => "motivation",
        }
    }

    /// Parse a lowercase category key. Returns `None` for anything else,
    /// including `"all"`, which is not a real category.
    pub fn parse(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == key)
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tab key: either the synthetic "all" grouping or one real category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(CategoryKey),
}

impl CategoryFilter {
    /// Display order of the tab row.
    pub const TABS: [CategoryFilter; 6] = [
        CategoryFilter::All,
        CategoryFilter::Only(CategoryKey::Structure),
        CategoryFilter::Only(CategoryKey::Clarity),
        CategoryFilter::Only(CategoryKey::Engagement),
        CategoryFilter::Only(CategoryKey::Execution),
        CategoryFilter::Only(CategoryKey::Motivation),
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(key) => key.as_str(),
        }
    }

    pub fn parse(key: &str) -> Option<Self> {
        if key == "all" {
            Some(CategoryFilter::All)
        } else {
            CategoryKey::parse(key).map(CategoryFilter::Only)
        }
    }

    pub fn matches(self, principle: &Principle) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(key) => principle.category == key,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One catalogued prompt-engineering guideline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principle {
    pub id: PrincipleId,
    pub category: CategoryKey,
    pub title: &'static str,
    pub description: &'static str,
    pub example: &'static str,
}

/// A tab entry with its derived principle count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub key: CategoryFilter,
    pub name: &'static str,
    /// Accent name resolved to a theme color by the renderer.
    pub color_tag: &'static str,
    pub count: usize,
}

/// Footer hint shown under the card grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickTip {
    pub label: &'static str,
    pub text: &'static str,
    pub color_tag: &'static str,
}

pub const SHEET_TITLE: &str = "26 Principled Prompting Instructions";
pub const SHEET_SUBTITLE: &str =
    "Evidence-based prompt engineering guidelines for optimal AI interaction";
pub const PAPER_LABEL: &str = "Academic Paper: Principled Instructions Are All You Need for Questioning LLaMA-1/2, GPT-3.5/4";
pub const PAPER_URL: &str = "https://arxiv.org/pdf/2312.16171";

pub static PRINCIPLES: &[Principle] = &[
    // Prompt structuring and formatting
    Principle {
        id: 1,
        category: CategoryKey::Structure,
        title: "Structured Formatting",
        description: "Begin prompts with '###Instruction###', followed by '###Example###' or '###Question###'",
        example: "###Instruction###\nWrite a summary\n###Example###\nSolar power...",
    },
    Principle {
        id: 2,
        category: CategoryKey::Structure,
        title: "Use Delimiters",
        description: "Use delimiters to structure prompts effectively",
        example: "--- CONTEXT ---\n[info]\n--- TASK ---\n[request]",
    },
    Principle {
        id: 3,
        category: CategoryKey::Structure,
        title: "Direct Task Assignment",
        description: "Use phrases like \"Your task is\" and \"You MUST\"",
        example: "Your task is to analyze data and You MUST provide insights.",
    },
    Principle {
        id: 4,
        category: CategoryKey::Structure,
        title: "Precise Requirements",
        description: "State explicit requirements for content creation",
        example: "Write 500 words with 3 sections, 2 examples each.",
    },
    Principle {
        id: 5,
        category: CategoryKey::Structure,
        title: "Output Primers",
        description: "End prompts with the start of expected response",
        example: "Explain photosynthesis. The process begins when...",
    },
    // Clarity and communication
    Principle {
        id: 6,
        category: CategoryKey::Clarity,
        title: "Direct Communication",
        description: "Avoid polite phrases like \"please\" or \"thank you\"",
        example: "\"Generate a list\" instead of \"Please generate a list\"",
    },
    Principle {
        id: 7,
        category: CategoryKey::Clarity,
        title: "Simple Explanations",
        description: "Request explanations suitable for beginners",
        example: "Explain quantum physics like I'm 10 years old.",
    },
    Principle {
        id: 8,
        category: CategoryKey::Clarity,
        title: "Natural Language Response",
        description: "Request natural, human-like answers",
        example: "Write in a conversational tone as if explaining to a friend.",
    },
    Principle {
        id: 9,
        category: CategoryKey::Clarity,
        title: "Affirmative Directives",
        description: "Use positive language instead of negative",
        example: "\"Focus on solutions\" instead of \"Don't mention problems\"",
    },
    Principle {
        id: 10,
        category: CategoryKey::Clarity,
        title: "Unbiased Responses",
        description: "Ensure answers are unbiased and stereotype-free",
        example: "Provide objective analysis of different viewpoints.",
    },
    // Engagement and interaction
    Principle {
        id: 11,
        category: CategoryKey::Engagement,
        title: "Audience Integration",
        description: "Tailor prompts considering audience expertise level",
        example: "Explain ML for developers with 5+ years experience.",
    },
    Principle {
        id: 12,
        category: CategoryKey::Engagement,
        title: "Interactive Engagement",
        description: "Allow the model to ask clarifying questions",
        example: "Ask me specific questions if you need more details.",
    },
    Principle {
        id: 13,
        category: CategoryKey::Engagement,
        title: "Leading Words",
        description: "Guide responses with phrases like \"think step by step\"",
        example: "Think step by step to solve this problem.",
    },
    Principle {
        id: 14,
        category: CategoryKey::Engagement,
        title: "Learning with Testing",
        description: "Request teaching with a test at the end",
        example: "Teach me photosynthesis, then give me a quiz.",
    },
    Principle {
        id: 15,
        category: CategoryKey::Engagement,
        title: "Role Assignment",
        description: "Assign specific roles to the language model",
        example: "Act as a senior marketing consultant.",
    },
    // Task specification and execution
    Principle {
        id: 16,
        category: CategoryKey::Execution,
        title: "Breaking Down Tasks",
        description: "Simplify complex tasks into manageable prompts",
        example: "First outline topics, then write detailed sections.",
    },
    Principle {
        id: 17,
        category: CategoryKey::Execution,
        title: "Detailed Text Requests",
        description: "Ask for detailed essays on specific topics",
        example: "Write a comprehensive 1000-word analysis.",
    },
    Principle {
        id: 18,
        category: CategoryKey::Execution,
        title: "Example-Driven Prompting",
        description: "Use few-shot prompting with examples",
        example: "Format: Input: [text] → Output: [summary]",
    },
    Principle {
        id: 19,
        category: CategoryKey::Execution,
        title: "Chain-of-Thought with Examples",
        description: "Combine reasoning with few-shot prompts",
        example: "Problem: 15×24. Thinking: 15×20=300, 15×4=60...",
    },
    Principle {
        id: 20,
        category: CategoryKey::Execution,
        title: "Continuation Prompts",
        description: "Continue or finish provided text",
        example: "Continue: 'The lighthouse keeper noticed...'",
    },
    Principle {
        id: 21,
        category: CategoryKey::Execution,
        title: "Text Revision",
        description: "Request improvements without style changes",
        example: "Improve grammar but keep the same style.",
    },
    Principle {
        id: 22,
        category: CategoryKey::Execution,
        title: "Complex Coding Tasks",
        description: "Request scripts for multi-file projects",
        example: "Create full React project with separate components.",
    },
    // Motivation and quality control
    Principle {
        id: 23,
        category: CategoryKey::Motivation,
        title: "Incentivizing Quality",
        description: "Suggest tips for better solutions",
        example: "I'll tip $200 for comprehensive response.",
    },
    Principle {
        id: 24,
        category: CategoryKey::Motivation,
        title: "Penalty Notification",
        description: "State penalties for specific actions",
        example: "Penalty for providing inaccurate information.",
    },
    Principle {
        id: 25,
        category: CategoryKey::Motivation,
        title: "Repetition for Emphasis",
        description: "Repeat words/phrases for emphasis",
        example: "This is CRITICAL. Deadline is CRITICAL.",
    },
    Principle {
        id: 26,
        category: CategoryKey::Motivation,
        title: "Imitating Style",
        description: "Request text similar to provided sample",
        example: "Write in same tone as this example: [sample]",
    },
];

pub static QUICK_TIPS: &[QuickTip] = &[
    QuickTip {
        label: "Structure",
        text: "Use clear delimiters and formatting",
        color_tag: "blue",
    },
    QuickTip {
        label: "Clarity",
        text: "Be direct and specific",
        color_tag: "green",
    },
    QuickTip {
        label: "Engagement",
        text: "Use roles and step-by-step guidance",
        color_tag: "purple",
    },
    QuickTip {
        label: "Execution",
        text: "Break complex tasks down",
        color_tag: "orange",
    },
    QuickTip {
        label: "Quality",
        text: "Use incentives and clear expectations",
        color_tag: "red",
    },
    QuickTip {
        label: "Remember",
        text: "Click + to see examples",
        color_tag: "gray",
    },
];

fn category_label(filter: CategoryFilter) -> (&'static str, &'static str) {
    match filter {
        CategoryFilter::All => ("All Principles", "gray"),
        CategoryFilter::Only(CategoryKey::Structure) => ("Structure & Formatting", "blue"),
        CategoryFilter::Only(CategoryKey::Clarity) => ("Clarity & Communication", "green"),
        CategoryFilter::Only(CategoryKey::Engagement) => ("Engagement & Interaction", "purple"),
        CategoryFilter::Only(CategoryKey::Execution) => ("Task Execution", "orange"),
        CategoryFilter::Only(CategoryKey::Motivation) => ("Quality Control", "red"),
    }
}

/// Build the tab table for an arbitrary principle list, counting members.
pub fn derive_categories(principles: &[Principle]) -> Vec<Category> {
    CategoryFilter::TABS
        .into_iter()
        .map(|key| {
            let (name, color_tag) = category_label(key);
            Category {
                key,
                name,
                color_tag,
                count: principles.iter().filter(|p| key.matches(p)).count(),
            }
        })
        .collect()
}

static CATEGORIES: Lazy<Vec<Category>> = Lazy::new(|| derive_categories(PRINCIPLES));

/// All principles in ascending id order.
pub fn principles() -> &'static [Principle] {
    PRINCIPLES
}

/// Tab entries in display order, `all` first.
pub fn categories() -> &'static [Category] {
    &CATEGORIES
}

pub fn category(key: CategoryFilter) -> &'static Category {
    // TABS covers every filter value, so the lookup cannot miss.
    let index = CategoryFilter::TABS
        .iter()
        .position(|k| *k == key)
        .unwrap_or_default();
    &CATEGORIES[index]
}

pub fn principle(id: PrincipleId) -> Option<&'static Principle> {
    PRINCIPLES.iter().find(|p| p.id == id)
}

pub fn quick_tips() -> &'static [QuickTip] {
    QUICK_TIPS
}

/// Check the catalog invariants: ids ascend from 1 without gaps, every count
/// matches its principles, and the `all` count equals the sum of the others.
pub fn verify_catalog(principles: &[Principle], categories: &[Category]) -> Result<()> {
    for (index, principle) in principles.iter().enumerate() {
        let expected = index as PrincipleId + 1;
        ensure!(
            principle.id == expected,
            "principle at position {} has id {}, expected {}",
            index,
            principle.id,
            expected
        );
    }

    let mut category_total = 0;
    let mut saw_all = false;
    for category in categories {
        let actual = principles.iter().filter(|p| category.key.matches(p)).count();
        if category.count != actual {
            bail!(
                "category '{}' declares {} principles but {} are tagged with it",
                category.key,
                category.count,
                actual
            );
        }
        match category.key {
            CategoryFilter::All => saw_all = true,
            CategoryFilter::Only(_) => category_total += category.count,
        }
    }

    ensure!(saw_all, "category table has no 'all' entry");
    ensure!(
        category_total == principles.len(),
        "category counts sum to {} but the catalog holds {} principles",
        category_total,
        principles.len()
    );

    for key in CategoryKey::ALL {
        let listed = categories
            .iter()
            .filter(|c| c.key == CategoryFilter::Only(key))
            .count();
        ensure!(listed == 1, "category '{}' is listed {} times", key, listed);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_counts_match_source_card() {
        let counts: Vec<(CategoryFilter, usize)> =
            categories().iter().map(|c| (c.key, c.count)).collect();
        assert_eq!(
            counts,
            vec![
                (CategoryFilter::All, 26),
                (CategoryFilter::Only(CategoryKey::Structure), 5),
                (CategoryFilter::Only(CategoryKey::Clarity), 5),
                (CategoryFilter::Only(CategoryKey::Engagement), 5),
                (CategoryFilter::Only(CategoryKey::Execution), 7),
                (CategoryFilter::Only(CategoryKey::Motivation), 4),
            ]
        );
    }

    #[test]
    fn compiled_catalog_is_consistent() {
        verify_catalog(principles(), categories()).unwrap();
    }

    #[test]
    fn parse_round_trips_keys() {
        for filter in CategoryFilter::TABS {
            assert_eq!(CategoryFilter::parse(filter.as_str()), Some(filter));
        }
        assert_eq!(CategoryKey::parse("all"), None);
        assert_eq!(CategoryFilter::parse("Clarity"), None);
    }

    #[test]
    fn category_lookup_by_key() {
        let clarity = category(CategoryFilter::Only(CategoryKey::Clarity));
        assert_eq!(clarity.name, "Clarity & Communication");
        assert_eq!(clarity.color_tag, "green");
        assert_eq!(category(CategoryFilter::All).count, PRINCIPLES.len());
    }

    #[test]
    fn principle_lookup() {
        assert_eq!(principle(13).map(|p| p.title), Some("Leading Words"));
        assert!(principle(0).is_none());
        assert!(principle(27).is_none());
    }
}
