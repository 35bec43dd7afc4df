//! Decision tree calculators
//!
//! Counts and heights are shown as plain numbers. The preorder check is the
//! only entry here that takes a text input.

use crate::preorder::{is_valid_bst_preorder, parse_sequence};
use crate::{ResultLine, SimulationDefinition, SimulationInputs, SimulationOutput};
use simuhub_types::InputField;
use tracing::debug;

pub const SEQUENCE_UNDEFINED: &str = "Undefined (Sequence must be comma-separated integers)";

pub fn simulations() -> Vec<SimulationDefinition> {
    vec![
        SimulationDefinition::new(
            "binary-tree-depth",
            "Binary Tree Depth",
            "Calculate the depth of a complete binary tree holding a given number of nodes.",
            vec![InputField::number("nodes", "Number of Nodes", 15.0)],
            binary_tree_depth,
        ),
        SimulationDefinition::new(
            "binary-search-tree-check",
            "Binary Search Tree Check",
            "Check whether a sequence of integers is the preorder traversal of a binary search tree.",
            vec![InputField::text(
                "sequence",
                "Preorder Sequence (comma-separated)",
                "8,5,1,7,10,12",
            )],
            binary_search_tree_check,
        ),
        SimulationDefinition::new(
            "tree-node-count",
            "Tree Node Count",
            "Calculate the maximum number of nodes a binary tree of a given height can hold.",
            vec![InputField::number("height", "Tree Height (levels)", 4.0)],
            tree_node_count,
        ),
        SimulationDefinition::new(
            "tree-traversal-steps",
            "Tree Traversal Steps",
            "Count the steps a full traversal takes to visit every node and return along each edge.",
            vec![InputField::number("nodes", "Number of Nodes", 7.0)],
            tree_traversal_steps,
        ),
        SimulationDefinition::new(
            "balanced-tree-check",
            "Balanced Tree Check",
            "Compare the height of a perfectly balanced tree with that of a fully degenerate one.",
            vec![InputField::number("nodes", "Number of Nodes", 7.0)],
            balanced_tree_check,
        ),
        SimulationDefinition::new(
            "minimum-tree-height",
            "Minimum Tree Height",
            "Calculate the minimum height of a binary tree that can hold a given number of nodes.",
            vec![InputField::number("nodes", "Number of Nodes", 7.0)],
            minimum_tree_height,
        ),
    ]
}

fn binary_tree_depth(inputs: &SimulationInputs<'_>) -> SimulationOutput {
    let nodes = inputs.number("nodes");
    let depth = if nodes > 0.0 {
        nodes.log2().floor() + 1.0
    } else {
        0.0
    };
    SimulationOutput::new(ResultLine::plain("Tree Depth", depth, " levels"))
}

fn binary_search_tree_check(inputs: &SimulationInputs<'_>) -> SimulationOutput {
    const CAPTION: &str = "Valid BST Preorder";
    match parse_sequence(inputs.text("sequence").unwrap_or_default()) {
        Ok(sequence) => {
            let valid = is_valid_bst_preorder(&sequence);
            SimulationOutput::new(ResultLine::flag(CAPTION, valid))
        }
        Err(err) => {
            debug!(error = %err, "rejected preorder sequence");
            SimulationOutput::new(ResultLine::undefined(CAPTION, SEQUENCE_UNDEFINED, ""))
        }
    }
}

fn tree_node_count(inputs: &SimulationInputs<'_>) -> SimulationOutput {
    let nodes = 2f64.powf(inputs.number("height")) - 1.0;
    SimulationOutput::new(ResultLine::plain("Maximum Nodes", nodes, ""))
}

fn tree_traversal_steps(inputs: &SimulationInputs<'_>) -> SimulationOutput {
    let nodes = inputs.number("nodes");
    let steps = if nodes > 0.0 { 2.0 * nodes - 1.0 } else { 0.0 };
    SimulationOutput::new(ResultLine::plain("Traversal Steps", steps, ""))
}

fn balanced_tree_check(inputs: &SimulationInputs<'_>) -> SimulationOutput {
    let nodes = inputs.number("nodes");
    let min_height = nodes.log2().floor() + 1.0;
    SimulationOutput::new(ResultLine::plain("Minimum Height", min_height, ""))
        .with_line(ResultLine::plain("Maximum Height", nodes, ""))
}

fn minimum_tree_height(inputs: &SimulationInputs<'_>) -> SimulationOutput {
    let height = (inputs.number("nodes") + 1.0).log2().ceil();
    SimulationOutput::new(ResultLine::plain("Minimum Height", height, ""))
}
