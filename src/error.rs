use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("terminal is {width}x{height}, need at least {min_width}x{min_height}")]
    ScreenTooSmall {
        width: i32,
        height: i32,
        min_width: i32,
        min_height: i32,
    },
    #[error("terminal i/o failed: {0}")]
    Io(#[from] std::io::Error),
}
