//! Decision tree over survey answers.
//!
//! The tree is an immutable tagged-variant structure: internal nodes ask one
//! survey question and branch on its value, leaves carry a hand-curated
//! ordered list of course codes. Missing or unrecognized answers always take
//! a node's fallback branch, so the walk is total.

use crate::core::models::{GroupWork, LearningStyle, SurveyAnswers, Workload};
use std::sync::LazyLock;

/// Which survey answer an internal node branches on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurveyQuestion {
    /// Branch on `answers.workload`
    Workload,
    /// Branch on `answers.learning_style`
    LearningStyle,
    /// Branch on `answers.group_work`
    GroupWork,
}

/// One node of the decision tree
#[derive(Debug, Clone)]
pub enum DecisionNode {
    /// Internal node: look up the answer to `question` among `branches`,
    /// falling back to `fallback` when absent or unrecognized
    Branch {
        /// Question this node branches on
        question: SurveyQuestion,
        /// (answer key, subtree) pairs in declaration order
        branches: Vec<(&'static str, DecisionNode)>,
        /// Subtree taken for missing/unrecognized answers
        fallback: Box<DecisionNode>,
    },
    /// Leaf node: an ordered list of suggested course codes
    Leaf {
        /// Course codes in recommendation order
        recommend: Vec<&'static str>,
    },
}

impl SurveyAnswers {
    /// Branch key for the given question, if that answer was recognized
    #[must_use]
    pub fn branch_key(&self, question: SurveyQuestion) -> Option<&'static str> {
        match question {
            SurveyQuestion::Workload => self.workload.map(Workload::key),
            SurveyQuestion::LearningStyle => self.learning_style.map(LearningStyle::key),
            SurveyQuestion::GroupWork => self.group_work.map(GroupWork::key),
        }
    }
}

/// Walk the tree with the given answers and return the leaf's course codes
/// in their curated order.
#[must_use]
pub fn walk<'a>(node: &'a DecisionNode, answers: &SurveyAnswers) -> &'a [&'static str] {
    match node {
        DecisionNode::Leaf { recommend } => recommend,
        DecisionNode::Branch {
            question,
            branches,
            fallback,
        } => {
            let key = answers.branch_key(*question);
            let next = key
                .and_then(|k| branches.iter().find(|(b, _)| *b == k).map(|(_, n)| n))
                .unwrap_or(fallback);
            walk(next, answers)
        }
    }
}

fn leaf(recommend: &[&'static str]) -> DecisionNode {
    DecisionNode::Leaf {
        recommend: recommend.to_vec(),
    }
}

/// The advising tree shipped with the demo, keyed on workload, then learning
/// style, and for some medium branches a third level on group work.
pub static ADVISING_TREE: LazyLock<DecisionNode> = LazyLock::new(|| DecisionNode::Branch {
    question: SurveyQuestion::Workload,
    branches: vec![
        (
            "light",
            DecisionNode::Branch {
                question: SurveyQuestion::LearningStyle,
                branches: vec![
                    ("visual", leaf(&["CS 4243", "CS 3723", "CS 3443"])),
                    ("hands-on", leaf(&["CS 4273", "CS 3443", "CS 4433"])),
                ],
                fallback: Box::new(leaf(&["CS 3443", "CS 4433"])),
            },
        ),
        (
            "medium",
            DecisionNode::Branch {
                question: SurveyQuestion::LearningStyle,
                branches: vec![
                    (
                        "visual",
                        DecisionNode::Branch {
                            question: SurveyQuestion::GroupWork,
                            branches: vec![
                                ("love", leaf(&["CS 4243", "CS 4273", "CS 4433", "CS 3443"])),
                                ("dislike", leaf(&["CS 4243", "CS 4433", "CS 3443"])),
                            ],
                            fallback: Box::new(leaf(&["CS 4243", "CS 3443", "CS 4433"])),
                        },
                    ),
                    (
                        "hands-on",
                        DecisionNode::Branch {
                            question: SurveyQuestion::GroupWork,
                            branches: vec![(
                                "love",
                                leaf(&["CS 4273", "CS 4523", "CS 3443", "CS 4433"]),
                            )],
                            fallback: Box::new(leaf(&["CS 3443", "CS 4323", "CS 4433", "CS 4273"])),
                        },
                    ),
                ],
                fallback: Box::new(leaf(&["CS 3443", "CS 4323", "CS 4433", "CS 4273"])),
            },
        ),
        (
            "heavy",
            DecisionNode::Branch {
                question: SurveyQuestion::LearningStyle,
                branches: vec![
                    (
                        "visual",
                        leaf(&[
                            "CS 3443", "CS 4243", "CS 4433", "CS 4273", "CS 4323", "CS 4523",
                        ]),
                    ),
                    (
                        "hands-on",
                        leaf(&[
                            "CS 3443", "CS 4273", "CS 4323", "CS 4433", "CS 4523", "CS 4983",
                        ]),
                    ),
                ],
                fallback: Box::new(leaf(&[
                    "CS 3443", "CS 4323", "CS 4433", "CS 4273", "CS 4523", "CS 4983",
                ])),
            },
        ),
    ],
    fallback: Box::new(leaf(&["CS 3443", "CS 4433"])),
});
