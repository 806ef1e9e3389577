//! Behaviour tests for dragging tasks between board columns.

mod board_moves_steps;

use board_moves_steps::world::{BoardWorld, world};
use rstest_bdd_macros::scenario;

#[scenario(
    path = "tests/features/board_moves.feature",
    name = "Drag a task into another column"
)]
#[tokio::test(flavor = "multi_thread")]
async fn drag_into_another_column(world: BoardWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/board_moves.feature",
    name = "Drop a task back onto its own column"
)]
#[tokio::test(flavor = "multi_thread")]
async fn drop_onto_own_column(world: BoardWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/board_moves.feature",
    name = "Reject a drop carrying a stale source column"
)]
#[tokio::test(flavor = "multi_thread")]
async fn reject_stale_source(world: BoardWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/board_moves.feature",
    name = "Reject an unknown destination column"
)]
#[tokio::test(flavor = "multi_thread")]
async fn reject_unknown_destination(world: BoardWorld) {
    let _ = world;
}
