//! Centrality scores over the undirected projection of a concept graph.
//!
//! Scores are returned as vectors indexed by vertex insertion order; the
//! parent module pairs them with ids and sorts them into rankings. Degree
//! centrality counts the multigraph (parallel edges and self-loops), while
//! closeness and betweenness run on the simple projection, where parallel
//! edges neither shorten distances nor multiply path counts.

use std::collections::VecDeque;

use super::Adjacency;

/// Degree centrality: multigraph degree normalized by `n - 1`.
///
/// A graph with at most one vertex scores 1.0 for every vertex.
pub(crate) fn degree(degrees: &[usize]) -> Vec<f64> {
    let n = degrees.len();
    if n <= 1 {
        return vec![1.0; n];
    }

    let scale = 1.0 / (n as f64 - 1.0);
    degrees.iter().map(|&d| d as f64 * scale).collect()
}

/// Closeness centrality with the improved Wasserman-Faust normalization.
///
/// For a vertex whose reachable set has size `r` (including itself) and
/// total BFS distance `d`, the score is `((r - 1) / d) * ((r - 1) / (n - 1))`.
/// Isolated vertices score 0.0. On a connected graph the second factor is 1
/// and this reduces to the classic inverse average distance.
pub(crate) fn closeness(adjacency: &Adjacency) -> Vec<f64> {
    let n = adjacency.len();
    let mut scores = vec![0.0; n];
    if n <= 1 {
        return scores;
    }

    let mut distances = vec![usize::MAX; n];

    for vertex in 0..n {
        bfs_distances(adjacency, vertex, &mut distances);

        let mut reached = 0usize;
        let mut total = 0usize;
        for &distance in &distances {
            if distance != usize::MAX {
                reached += 1;
                total += distance;
            }
        }

        if total > 0 {
            let inverse_average = (reached - 1) as f64 / total as f64;
            let reachable_fraction = (reached - 1) as f64 / (n - 1) as f64;
            scores[vertex] = inverse_average * reachable_fraction;
        }
    }

    scores
}

/// Betweenness centrality via Brandes' dependency accumulation.
///
/// Normalized so a vertex lying on every shortest path between every other
/// pair scores 1.0; graphs with `n <= 2` have no intermediary pairs and
/// score all zeros.
pub(crate) fn betweenness(adjacency: &Adjacency) -> Vec<f64> {
    let n = adjacency.len();
    let mut scores = vec![0.0; n];
    if n <= 2 {
        return scores;
    }

    let mut order = Vec::with_capacity(n);
    let mut predecessors: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut path_counts = vec![0.0f64; n];
    let mut distances = vec![usize::MAX; n];
    let mut dependencies = vec![0.0f64; n];

    for source in 0..n {
        order.clear();
        for list in &mut predecessors {
            list.clear();
        }
        path_counts.fill(0.0);
        distances.fill(usize::MAX);

        path_counts[source] = 1.0;
        distances[source] = 0;
        let mut queue = VecDeque::new();
        queue.push_back(source);

        while let Some(vertex) = queue.pop_front() {
            order.push(vertex);
            for &next in adjacency.neighbors(vertex) {
                if distances[next] == usize::MAX {
                    distances[next] = distances[vertex] + 1;
                    queue.push_back(next);
                }
                if distances[next] == distances[vertex] + 1 {
                    path_counts[next] += path_counts[vertex];
                    predecessors[next].push(vertex);
                }
            }
        }

        dependencies.fill(0.0);
        for &vertex in order.iter().rev() {
            for &pred in &predecessors[vertex] {
                let share =
                    path_counts[pred] / path_counts[vertex] * (1.0 + dependencies[vertex]);
                dependencies[pred] += share;
            }
            if vertex != source {
                scores[vertex] += dependencies[vertex];
            }
        }
    }

    // The accumulation above counts ordered source/target pairs; rescale to
    // the undirected convention.
    let scale = 1.0 / ((n - 1) as f64 * (n - 2) as f64);
    for score in &mut scores {
        *score *= scale;
    }

    scores
}

/// Breadth-first hop distances from `start`; unreachable vertices keep
/// `usize::MAX`.
fn bfs_distances(adjacency: &Adjacency, start: usize, distances: &mut [usize]) {
    distances.fill(usize::MAX);
    distances[start] = 0;

    let mut queue = VecDeque::new();
    queue.push_back(start);

    while let Some(vertex) = queue.pop_front() {
        for &next in adjacency.neighbors(vertex) {
            if distances[next] == usize::MAX {
                distances[next] = distances[vertex] + 1;
                queue.push_back(next);
            }
        }
    }
}
