//! Symbol dispatch and the turtle state machine.

use super::branch::{branch_segment, BranchStyle};
use super::frame::Frame;
use crate::error::{GeometryError, GeometryResult};
use crate::mesh::Mesh;
use crate::vector::Vec3;
use config::constants::{approx_zero, GenerationConfig, DEFAULT_BRANCH_LENGTH, DEFAULT_TURN_ANGLE};

/// Frame axis a rotation turns about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Turns normal and binormal.
    Tangent,
    /// Turns tangent and binormal.
    Normal,
    /// Turns tangent and normal.
    Binormal,
}

/// Direction of a rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sense {
    /// `+δ`
    Positive,
    /// `-δ`
    Negative,
}

/// One decoded turtle instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurtleCommand {
    /// `[`
    Push,
    /// `]`
    Pop,
    /// `+ - & ^ \ /`
    Rotate(Axis, Sense),
    /// `F`
    Forward,
}

impl TurtleCommand {
    /// Decodes a symbol; `None` for symbols the turtle ignores.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        let command = match symbol {
            '[' => Self::Push,
            ']' => Self::Pop,
            '+' => Self::Rotate(Axis::Tangent, Sense::Positive),
            '-' => Self::Rotate(Axis::Tangent, Sense::Negative),
            '&' => Self::Rotate(Axis::Normal, Sense::Positive),
            '^' => Self::Rotate(Axis::Normal, Sense::Negative),
            '\\' => Self::Rotate(Axis::Binormal, Sense::Positive),
            '/' => Self::Rotate(Axis::Binormal, Sense::Negative),
            'F' => Self::Forward,
            _ => return None,
        };
        Some(command)
    }
}

/// Turtle with a moving frame and a stack of saved branch points.
///
/// # Example
///
/// ```rust
/// use procgen_mesh::turtle::Turtle;
/// use procgen_mesh::Vec3;
///
/// let mut turtle = Turtle::new(Vec3::ZERO, Vec3::Z, Vec3::X)?;
/// let mesh = turtle.interpret("F[+F]F")?;
/// assert_eq!(mesh.face_count(), 30);
/// assert_eq!(turtle.frame().location, Vec3::new(0.0, 0.0, 2.0));
/// # Ok::<(), procgen_mesh::GeometryError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Turtle {
    frame: Frame,
    stack: Vec<Frame>,
    turn_angle: f64,
    branch_length: f64,
    branch_style: BranchStyle,
}

impl Turtle {
    /// Creates a turtle with a 90° turn angle, unit branch length and the
    /// default branch style.
    ///
    /// # Errors
    /// [`GeometryError::DivideByZero`] when the frame is degenerate.
    pub fn new(location: Vec3, tangent: Vec3, normal: Vec3) -> GeometryResult<Self> {
        let frame = Frame::new(location, tangent, normal)?;
        // The frame is used as given; rotations keep any initial skew
        if !approx_zero(frame.tangent.dot(frame.normal)) {
            tracing::warn!(
                tangent = ?frame.tangent,
                normal = ?frame.normal,
                "turtle tangent and normal are not orthogonal"
            );
        }
        Ok(Self {
            frame,
            stack: Vec::new(),
            turn_angle: DEFAULT_TURN_ANGLE,
            branch_length: DEFAULT_BRANCH_LENGTH,
            branch_style: BranchStyle::default(),
        })
    }

    /// Creates a turtle whose angle, length and branch style come from a
    /// validated configuration.
    pub fn from_config(
        location: Vec3,
        tangent: Vec3,
        normal: Vec3,
        config: &GenerationConfig,
    ) -> GeometryResult<Self> {
        config.validate()?;
        let turtle = Self::new(location, tangent, normal)?
            .with_turn_angle(config.turn_angle)?
            .with_branch_length(config.branch_length)?
            .with_branch_style(BranchStyle {
                radius: config.branch_radius,
                resolution: config.branch_resolution,
            })?;
        Ok(turtle)
    }

    /// Sets the turn angle δ in radians.
    pub fn with_turn_angle(mut self, turn_angle: f64) -> GeometryResult<Self> {
        if !turn_angle.is_finite() {
            return Err(GeometryError::configuration(format!(
                "turn angle must be finite, got {turn_angle}"
            )));
        }
        self.turn_angle = turn_angle;
        Ok(self)
    }

    /// Sets the distance covered by each `F`.
    pub fn with_branch_length(mut self, branch_length: f64) -> GeometryResult<Self> {
        if branch_length <= 0.0 || !branch_length.is_finite() {
            return Err(GeometryError::configuration(format!(
                "branch length must be positive, got {branch_length}"
            )));
        }
        self.branch_length = branch_length;
        Ok(self)
    }

    /// Sets the tube cross-section emitted by each `F`.
    pub fn with_branch_style(mut self, branch_style: BranchStyle) -> GeometryResult<Self> {
        branch_style.validate()?;
        self.branch_style = branch_style;
        Ok(self)
    }

    /// Current frame.
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Number of saved branch points.
    pub fn stack_depth(&self) -> usize {
        self.stack.len()
    }

    /// Turn angle δ.
    pub fn turn_angle(&self) -> f64 {
        self.turn_angle
    }

    /// Saves the current frame.
    pub fn push(&mut self) {
        self.stack.push(self.frame);
    }

    /// Restores the most recently saved frame.
    ///
    /// # Errors
    /// [`GeometryError::EmptyStack`] when nothing was saved.
    pub fn pop(&mut self) -> GeometryResult<()> {
        self.frame = self.stack.pop().ok_or(GeometryError::EmptyStack)?;
        Ok(())
    }

    /// Turns the frame about `axis` by `±δ`.
    pub fn rotate(&mut self, axis: Axis, sense: Sense) -> GeometryResult<()> {
        let delta = match sense {
            Sense::Positive => self.turn_angle,
            Sense::Negative => -self.turn_angle,
        };
        match axis {
            Axis::Tangent => self.frame.rotate_about_tangent(delta),
            Axis::Normal => self.frame.rotate_about_normal(delta),
            Axis::Binormal => self.frame.rotate_about_binormal(delta),
        }
    }

    /// Advances by the branch length along the tangent and returns the
    /// tube covering the step.
    pub fn move_forward(&mut self) -> GeometryResult<Mesh> {
        let start = self.frame.location;
        let end = start + self.branch_length * self.frame.tangent;
        let segment = branch_segment(
            start,
            end,
            self.frame.normal,
            self.frame.binormal,
            &self.branch_style,
        )?;
        self.frame.location = end;
        Ok(segment)
    }

    /// Runs one command; only [`TurtleCommand::Forward`] yields geometry.
    pub fn execute(&mut self, command: TurtleCommand) -> GeometryResult<Option<Mesh>> {
        match command {
            TurtleCommand::Push => self.push(),
            TurtleCommand::Pop => self.pop()?,
            TurtleCommand::Rotate(axis, sense) => self.rotate(axis, sense)?,
            TurtleCommand::Forward => return self.move_forward().map(Some),
        }
        Ok(None)
    }

    /// Interprets `word` left to right and returns one mesh per `F`.
    ///
    /// # Errors
    /// Stops at the first failing symbol; segments produced before it are
    /// discarded.
    pub fn process_word(&mut self, word: &str) -> GeometryResult<Vec<Mesh>> {
        let mut segments = Vec::new();
        for command in word.chars().filter_map(TurtleCommand::from_symbol) {
            if let Some(segment) = self.execute(command)? {
                segments.push(segment);
            }
        }

        tracing::debug!(
            symbols = word.len(),
            segments = segments.len(),
            open_branches = self.stack.len(),
            "turtle word processed"
        );

        Ok(segments)
    }

    /// Interprets `word` and merges all segments into one mesh.
    pub fn interpret(&mut self, word: &str) -> GeometryResult<Mesh> {
        let segments = self.process_word(word)?;
        Ok(Mesh::merge_all(&segments))
    }
}
