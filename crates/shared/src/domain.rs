macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(pub u64);
    };
}

id_newtype!(TaskRowId);

/// Number of frames in the heart reward cycle.
pub const HEART_FRAME_COUNT: usize = 5;

/// Hearts revealed per page session before the reward stops.
pub const MAX_HEARTS_SHOWN: usize = 5;

pub const HEART_ALT_TEXT: &str = "Heart animation frame";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HeartFrame(pub &'static str);

impl HeartFrame {
    pub fn path(&self) -> &'static str {
        self.0
    }
}

/// Ordered frame table. Every entry currently points at the same asset;
/// the cycle index still advances through all five.
pub const HEART_FRAMES: [HeartFrame; HEART_FRAME_COUNT] = [
    HeartFrame("static/hearts.png"),
    HeartFrame("static/hearts.png"),
    HeartFrame("static/hearts.png"),
    HeartFrame("static/hearts.png"),
    HeartFrame("static/hearts.png"),
];

/// A heart appended to the hearts container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeartImage {
    pub frame_index: usize,
    pub src: &'static str,
    pub alt: &'static str,
}

impl HeartImage {
    pub fn from_frame(frame_index: usize) -> Self {
        let frame = HEART_FRAMES[frame_index % HEART_FRAME_COUNT];
        Self {
            frame_index: frame_index % HEART_FRAME_COUNT,
            src: frame.path(),
            alt: HEART_ALT_TEXT,
        }
    }
}

/// One acknowledged message with its completion control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow {
    pub row_id: TaskRowId,
    pub text: String,
}
