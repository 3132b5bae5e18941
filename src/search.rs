//! The expansion loop and frontier bookkeeping shared by all three
//! algorithms. The loop is generic over the node and cost types; the solvers
//! in [crate::solver] instantiate it with [Point] cells and `u32` costs and
//! only differ in the frontier discipline and priority function they supply.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};
use std::hash::Hash;

use fxhash::FxBuildHasher;
use grid_util::point::Point;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use log::info;
use num_traits::Zero;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Outcome of one search invocation: the path from start to goal if one was
/// found, and the order in which cells were expanded. A missing path is a
/// normal result, not an error; the process trace is complete either way.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    pub path: Option<Vec<Point>>,
    pub process: Vec<Point>,
}

/// A frontier entry. Carries the full path taken from the start and the
/// sequence of direction indices along it; the latter is the lexicographic
/// tie-break key used by the priority frontiers.
#[derive(Clone, Debug)]
pub(crate) struct SearchNode<N, C> {
    pub cell: N,
    pub path: Vec<N>,
    pub turns: Vec<u8>,
    pub cost: C,
    pub priority: C,
}

/// Queue discipline of a search. BFS expands entries in discovery order,
/// UCS and A* expand the entry with the smallest priority first.
pub(crate) trait Frontier<N, C> {
    fn push(&mut self, node: SearchNode<N, C>);
    fn pop(&mut self) -> Option<SearchNode<N, C>>;
}

/// Strict first-in-first-out frontier; entry priorities are ignored.
pub(crate) struct FifoFrontier<N, C> {
    queue: VecDeque<SearchNode<N, C>>,
}

impl<N, C> FifoFrontier<N, C> {
    pub fn new() -> FifoFrontier<N, C> {
        FifoFrontier {
            queue: VecDeque::new(),
        }
    }
}

impl<N, C> Frontier<N, C> for FifoFrontier<N, C> {
    fn push(&mut self, node: SearchNode<N, C>) {
        self.queue.push_back(node);
    }

    fn pop(&mut self) -> Option<SearchNode<N, C>> {
        self.queue.pop_front()
    }
}

/// Best-first frontier: pops the entry with the smallest priority, breaking
/// ties on the lexicographically smallest turn sequence and then on the
/// smallest accumulated cost.
pub(crate) struct BestFirstFrontier<N, C: Ord> {
    heap: BinaryHeap<BestFirstEntry<N, C>>,
}

impl<N, C: Ord> BestFirstFrontier<N, C> {
    pub fn new() -> BestFirstFrontier<N, C> {
        BestFirstFrontier {
            heap: BinaryHeap::new(),
        }
    }
}

impl<N, C: Ord> Frontier<N, C> for BestFirstFrontier<N, C> {
    fn push(&mut self, node: SearchNode<N, C>) {
        self.heap.push(BestFirstEntry(node));
    }

    fn pop(&mut self) -> Option<SearchNode<N, C>> {
        self.heap.pop().map(|entry| entry.0)
    }
}

struct BestFirstEntry<N, C>(SearchNode<N, C>);

impl<N, C: Ord> PartialEq for BestFirstEntry<N, C> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<N, C: Ord> Eq for BestFirstEntry<N, C> {}

impl<N, C: Ord> PartialOrd for BestFirstEntry<N, C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N, C: Ord> Ord for BestFirstEntry<N, C> {
    // BinaryHeap is a max-heap, so every key is compared in reverse to pop
    // the smallest priority, then the smallest turn sequence, then the
    // smallest accumulated cost.
    fn cmp(&self, other: &Self) -> Ordering {
        match other.0.priority.cmp(&self.0.priority) {
            Ordering::Equal => match other.0.turns.cmp(&self.0.turns) {
                Ordering::Equal => other.0.cost.cmp(&self.0.cost),
                s => s,
            },
            s => s,
        }
    }
}

/// Pops entries from the frontier until the goal is popped or the frontier
/// runs empty, recording every expansion in the process trace. Neighbours
/// are queued whenever they are undiscovered or reached with a strictly
/// cheaper accumulated cost; stale entries already in the frontier are left
/// in place and re-expanded when popped, which shows up in the trace.
pub(crate) fn run_search<N, C, F, FN, IN, FP>(
    start: &N,
    goal: &N,
    mut frontier: F,
    mut successors: FN,
    mut priority: FP,
) -> (Option<Vec<N>>, Vec<N>)
where
    N: Eq + Hash + Clone,
    C: Zero + Ord + Copy,
    F: Frontier<N, C>,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = (u8, N, C)>,
    FP: FnMut(&N, C) -> C,
{
    let mut visited: FxIndexMap<N, C> = FxIndexMap::default();
    visited.insert(start.clone(), Zero::zero());
    let start_priority = priority(start, Zero::zero());
    frontier.push(SearchNode {
        cell: start.clone(),
        path: vec![start.clone()],
        turns: Vec::new(),
        cost: Zero::zero(),
        priority: start_priority,
    });
    let mut process: Vec<N> = Vec::new();
    while let Some(node) = frontier.pop() {
        process.push(node.cell.clone());
        if node.cell == *goal {
            return (Some(node.path), process);
        }
        for (dir, neighbour, step) in successors(&node.cell) {
            let new_cost = node.cost + step;
            match visited.entry(neighbour.clone()) {
                Vacant(e) => {
                    e.insert(new_cost);
                }
                Occupied(mut e) => {
                    if *e.get() > new_cost {
                        e.insert(new_cost);
                    } else {
                        continue;
                    }
                }
            }
            let mut path = node.path.clone();
            path.push(neighbour.clone());
            let mut turns = node.turns.clone();
            turns.push(dir);
            let entry_priority = priority(&neighbour, new_cost);
            frontier.push(SearchNode {
                cell: neighbour,
                path,
                turns,
                cost: new_cost,
                priority: entry_priority,
            });
        }
    }
    info!("frontier exhausted after {} expansions", process.len());
    (None, process)
}
