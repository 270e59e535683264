//! Gesture state and its direct-access keys
//!
//! [`GestureState`] is owned by one controller. The only outside writes go
//! through [`DataKey`] / [`BaseKey`], a closed set of typed escape hatches
//! used to hand positions between cooperating scroll regions. Those writes
//! are trusted: nothing recomputes or validates after them.

use glide_core::error::{GestureError, Result};
use glide_core::geometry::{Point, Size};

use crate::bounds::Bounds;

/// Mutable per-controller gesture state
#[derive(Debug, Clone, PartialEq)]
pub struct GestureState {
    /// Settled zoom
    pub scale: f64,
    /// Position at the last settle or drag start; drag deltas are relative to it
    pub origin: Point,
    /// Last single-touch page coordinates
    pub pointer: Point,
    /// Last rendered position
    pub current: Point,
    /// Raw finger travel of the drag in progress
    pub dist: Point,
    /// Travel after scaling, elasticity or clamping
    pub adjusted: Point,
    pub bounds: Bounds,
    /// Start of the velocity window
    pub gesture_start_time: f64,
    /// Position at the start of the velocity window
    pub drag_start: Point,
    /// A move sample arrived during this drag
    pub moved: bool,
    /// A pinch ended since the last drag start or settle
    pub pinched: bool,
}

impl Default for GestureState {
    fn default() -> Self {
        Self {
            scale: 1.0,
            origin: Point::ZERO,
            pointer: Point::ZERO,
            current: Point::ZERO,
            dist: Point::ZERO,
            adjusted: Point::ZERO,
            bounds: Bounds::default(),
            gesture_start_time: 0.0,
            drag_start: Point::ZERO,
            moved: false,
            pinched: false,
        }
    }
}

/// Recognized [`GestureState`] fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataKey {
    Scale,
    OriginX,
    OriginY,
    PointerX,
    PointerY,
    CurrentX,
    CurrentY,
    DistX,
    DistY,
    AdjustedDistX,
    AdjustedDistY,
    MoveAxisX,
    MoveAxisY,
    MinX,
    MaxX,
    MinY,
    MaxY,
    GestureStartTime,
    DragStartX,
    DragStartY,
    Moved,
    Pinched,
}

impl DataKey {
    pub const ALL: [DataKey; 22] = [
        DataKey::Scale,
        DataKey::OriginX,
        DataKey::OriginY,
        DataKey::PointerX,
        DataKey::PointerY,
        DataKey::CurrentX,
        DataKey::CurrentY,
        DataKey::DistX,
        DataKey::DistY,
        DataKey::AdjustedDistX,
        DataKey::AdjustedDistY,
        DataKey::MoveAxisX,
        DataKey::MoveAxisY,
        DataKey::MinX,
        DataKey::MaxX,
        DataKey::MinY,
        DataKey::MaxY,
        DataKey::GestureStartTime,
        DataKey::DragStartX,
        DataKey::DragStartY,
        DataKey::Moved,
        DataKey::Pinched,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DataKey::Scale => "scale",
            DataKey::OriginX => "origin_x",
            DataKey::OriginY => "origin_y",
            DataKey::PointerX => "pointer_x",
            DataKey::PointerY => "pointer_y",
            DataKey::CurrentX => "current_x",
            DataKey::CurrentY => "current_y",
            DataKey::DistX => "dist_x",
            DataKey::DistY => "dist_y",
            DataKey::AdjustedDistX => "adjusted_dist_x",
            DataKey::AdjustedDistY => "adjusted_dist_y",
            DataKey::MoveAxisX => "move_axis_x",
            DataKey::MoveAxisY => "move_axis_y",
            DataKey::MinX => "min_x",
            DataKey::MaxX => "max_x",
            DataKey::MinY => "min_y",
            DataKey::MaxY => "max_y",
            DataKey::GestureStartTime => "gesture_start_time",
            DataKey::DragStartX => "drag_start_x",
            DataKey::DragStartY => "drag_start_y",
            DataKey::Moved => "moved",
            DataKey::Pinched => "pinched",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.as_str() == name)
    }

    fn is_flag(&self) -> bool {
        matches!(
            self,
            DataKey::MoveAxisX | DataKey::MoveAxisY | DataKey::Moved | DataKey::Pinched
        )
    }
}

/// Value stored under a [`DataKey`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DataValue {
    Number(f64),
    Flag(bool),
}

impl DataValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            DataValue::Number(n) => Some(*n),
            DataValue::Flag(_) => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            DataValue::Flag(b) => Some(*b),
            DataValue::Number(_) => None,
        }
    }
}

impl From<f64> for DataValue {
    fn from(n: f64) -> Self {
        DataValue::Number(n)
    }
}

impl From<bool> for DataValue {
    fn from(b: bool) -> Self {
        DataValue::Flag(b)
    }
}

impl GestureState {
    pub fn get(&self, key: DataKey) -> DataValue {
        match key {
            DataKey::Scale => self.scale.into(),
            DataKey::OriginX => self.origin.x.into(),
            DataKey::OriginY => self.origin.y.into(),
            DataKey::PointerX => self.pointer.x.into(),
            DataKey::PointerY => self.pointer.y.into(),
            DataKey::CurrentX => self.current.x.into(),
            DataKey::CurrentY => self.current.y.into(),
            DataKey::DistX => self.dist.x.into(),
            DataKey::DistY => self.dist.y.into(),
            DataKey::AdjustedDistX => self.adjusted.x.into(),
            DataKey::AdjustedDistY => self.adjusted.y.into(),
            DataKey::MoveAxisX => self.bounds.x.movable.into(),
            DataKey::MoveAxisY => self.bounds.y.movable.into(),
            DataKey::MinX => self.bounds.x.min.into(),
            DataKey::MaxX => self.bounds.x.max.into(),
            DataKey::MinY => self.bounds.y.min.into(),
            DataKey::MaxY => self.bounds.y.max.into(),
            DataKey::GestureStartTime => self.gesture_start_time.into(),
            DataKey::DragStartX => self.drag_start.x.into(),
            DataKey::DragStartY => self.drag_start.y.into(),
            DataKey::Moved => self.moved.into(),
            DataKey::Pinched => self.pinched.into(),
        }
    }

    /// Direct write. Fails only when the value type does not match the key.
    pub fn set(&mut self, key: DataKey, value: DataValue) -> Result<()> {
        let mismatch = || GestureError::DataTypeMismatch { key: key.as_str() };
        if key.is_flag() {
            let flag = value.as_flag().ok_or_else(mismatch)?;
            match key {
                DataKey::MoveAxisX => self.bounds.x.movable = flag,
                DataKey::MoveAxisY => self.bounds.y.movable = flag,
                DataKey::Moved => self.moved = flag,
                _ => self.pinched = flag,
            }
            return Ok(());
        }

        let n = value.as_number().ok_or_else(mismatch)?;
        let slot = match key {
            DataKey::Scale => &mut self.scale,
            DataKey::OriginX => &mut self.origin.x,
            DataKey::OriginY => &mut self.origin.y,
            DataKey::PointerX => &mut self.pointer.x,
            DataKey::PointerY => &mut self.pointer.y,
            DataKey::CurrentX => &mut self.current.x,
            DataKey::CurrentY => &mut self.current.y,
            DataKey::DistX => &mut self.dist.x,
            DataKey::DistY => &mut self.dist.y,
            DataKey::AdjustedDistX => &mut self.adjusted.x,
            DataKey::AdjustedDistY => &mut self.adjusted.y,
            DataKey::MinX => &mut self.bounds.x.min,
            DataKey::MaxX => &mut self.bounds.x.max,
            DataKey::MinY => &mut self.bounds.y.min,
            DataKey::MaxY => &mut self.bounds.y.max,
            DataKey::GestureStartTime => &mut self.gesture_start_time,
            DataKey::DragStartX => &mut self.drag_start.x,
            _ => &mut self.drag_start.y,
        };
        *slot = n;
        Ok(())
    }
}

/// Last measured container and content sizes
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Geometry {
    pub container: Size,
    /// Natural (unzoomed) content size
    pub content: Size,
}

/// Recognized [`Geometry`] fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseKey {
    ContainerWidth,
    ContainerHeight,
    ContentWidth,
    ContentHeight,
}

impl BaseKey {
    pub const ALL: [BaseKey; 4] = [
        BaseKey::ContainerWidth,
        BaseKey::ContainerHeight,
        BaseKey::ContentWidth,
        BaseKey::ContentHeight,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BaseKey::ContainerWidth => "container_width",
            BaseKey::ContainerHeight => "container_height",
            BaseKey::ContentWidth => "content_width",
            BaseKey::ContentHeight => "content_height",
        }
    }
}

impl Geometry {
    pub fn new(container: Size, content: Size) -> Self {
        Self { container, content }
    }

    pub fn get(&self, key: BaseKey) -> f64 {
        match key {
            BaseKey::ContainerWidth => self.container.width,
            BaseKey::ContainerHeight => self.container.height,
            BaseKey::ContentWidth => self.content.width,
            BaseKey::ContentHeight => self.content.height,
        }
    }

    pub fn set(&mut self, key: BaseKey, value: f64) {
        match key {
            BaseKey::ContainerWidth => self.container.width = value,
            BaseKey::ContainerHeight => self.container.height = value,
            BaseKey::ContentWidth => self.content.width = value,
            BaseKey::ContentHeight => self.content.height = value,
        }
    }
}
