use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PhysicsError {
    #[error("no ball with id `{0}`")]
    UnknownBall(String),
    #[error("ball `{0}` is not being dragged")]
    NotDragging(String),
}
