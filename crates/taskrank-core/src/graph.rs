//! Dependency graph over a task batch.
//!
//! Built once per batch from each task's declared dependency list, then
//! treated as read-only. Cycle detection runs at build time with a
//! three-color depth-first traversal on an explicit stack, so pathological
//! inputs cannot blow the call stack.

use std::collections::BTreeMap;

use crate::task::Task;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    White,
    Gray,
    Black,
}

/// Directed dependency graph: forward edges are "blocked by", reverse
/// edges are "unblocks". Every id seen during construction appears as a
/// key in both maps, even with an empty list.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    blocked_by: BTreeMap<String, Vec<String>>,
    unblocks: BTreeMap<String, Vec<String>>,
    cycles: Vec<Vec<String>>,
}

impl DependencyGraph {
    /// Build the graph from `(task id, dependency ids)` pairs.
    ///
    /// Dependency targets that are not task ids still get nodes; they can
    /// never resolve to a task, but traversal must not trip over them.
    pub fn build(entries: &[(String, Vec<String>)]) -> Self {
        let mut blocked_by: BTreeMap<String, Vec<String>> = BTreeMap::new();
        let mut unblocks: BTreeMap<String, Vec<String>> = BTreeMap::new();

        for (id, deps) in entries {
            blocked_by
                .entry(id.clone())
                .or_default()
                .extend(deps.iter().cloned());
            unblocks.entry(id.clone()).or_default();
            for dep in deps {
                blocked_by.entry(dep.clone()).or_default();
                unblocks.entry(dep.clone()).or_default().push(id.clone());
            }
        }

        let cycles = detect_cycles(&blocked_by);
        tracing::debug!(
            nodes = blocked_by.len(),
            cycles = cycles.len(),
            "dependency graph built"
        );
        Self {
            blocked_by,
            unblocks,
            cycles,
        }
    }

    /// Ids this task declares as blockers.
    pub fn blocked_by(&self, id: &str) -> &[String] {
        self.blocked_by.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Ids of tasks waiting on this one.
    pub fn unblocks(&self, id: &str) -> &[String] {
        self.unblocks.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every cycle path found during construction. A path reads
    /// `a -> ... -> a`, with the entry node repeated at the end.
    pub fn cycles(&self) -> &[Vec<String>] {
        &self.cycles
    }

    /// A task is cyclic iff its id appears in any recorded cycle path.
    pub fn is_cyclic(&self, id: &str) -> bool {
        self.cycles.iter().any(|path| path.iter().any(|n| n == id))
    }

    /// Resolve this task's blockers to task records, dropping ids that do
    /// not exist in the batch.
    pub fn blocked_by_tasks<'a>(
        &self,
        id: &str,
        tasks_by_id: &'a BTreeMap<String, Task>,
    ) -> Vec<&'a Task> {
        self.blocked_by(id)
            .iter()
            .filter_map(|dep| tasks_by_id.get(dep))
            .collect()
    }

    /// Resolve this task's dependents to task records, dropping unknown ids.
    pub fn unblocks_tasks<'a>(
        &self,
        id: &str,
        tasks_by_id: &'a BTreeMap<String, Task>,
    ) -> Vec<&'a Task> {
        self.unblocks(id)
            .iter()
            .filter_map(|dep| tasks_by_id.get(dep))
            .collect()
    }
}

/// Three-color depth-first cycle search over the adjacency map.
///
/// Runs from every unvisited node so cycles disconnected from earlier
/// roots are still found. The stack holds `(node, next child index)`
/// frames; `path` mirrors the gray chain so a back edge can report the
/// exact cycle from the first occurrence of the revisited node.
fn detect_cycles(adjacency: &BTreeMap<String, Vec<String>>) -> Vec<Vec<String>> {
    let mut color: BTreeMap<&str, Color> = adjacency
        .keys()
        .map(|id| (id.as_str(), Color::White))
        .collect();
    let mut cycles = Vec::new();

    for root in adjacency.keys() {
        if color.get(root.as_str()) != Some(&Color::White) {
            continue;
        }
        let mut stack: Vec<(&str, usize)> = vec![(root.as_str(), 0)];
        let mut path: Vec<&str> = Vec::new();

        while let Some((node, child_index)) = stack.pop() {
            if child_index == 0 {
                color.insert(node, Color::Gray);
                path.push(node);
            }
            let children = adjacency.get(node).map(Vec::as_slice).unwrap_or(&[]);
            if let Some(child) = children.get(child_index) {
                stack.push((node, child_index + 1));
                match color.get(child.as_str()).copied().unwrap_or(Color::White) {
                    Color::Gray => {
                        if let Some(start) = path.iter().position(|n| *n == child.as_str()) {
                            let mut cycle: Vec<String> =
                                path[start..].iter().map(|n| n.to_string()).collect();
                            cycle.push(child.to_string());
                            cycles.push(cycle);
                        }
                    }
                    Color::White => stack.push((child.as_str(), 0)),
                    Color::Black => {}
                }
            } else {
                color.insert(node, Color::Black);
                path.pop();
            }
        }
    }
    cycles
}
