//! Closed set of shape kinds and the tagged union over them.
//!
//! [`ShapeKind`] names a kind (and parses it from user input);
//! [`Primitive`] holds the parameters of any one kind and forwards the
//! [`Geometry`] contract to it, so an optimizer can keep a single
//! `Vec<Shape<Primitive>>` of mixed kinds.

use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::canvas::Canvas;
use crate::error::ShapeError;
use crate::path_storage::PathStorage;
use crate::random::RandomSource;
use crate::scanline::Scanline;
use crate::shape::{Geometry, Shape};
use crate::shapes::{
    Circle, Crescent, Ellipse, FourPointedStar, Hexagon, Hexagram, Octagon, Pentagon, Pentagram,
    QuadraticBezier, Quadrilateral, Rectangle, RotatedEllipse, RotatedRectangle, Square, Triangle,
};

// ============================================================================
// ShapeKind
// ============================================================================

/// Shape kind selector. `Any` picks a concrete kind uniformly at
/// construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Any = 0,
    Triangle,
    Rectangle,
    RotatedRectangle,
    Ellipse,
    RotatedEllipse,
    Circle,
    QuadraticBezier,
    Quadrilateral,
    Square,
    Pentagon,
    Hexagon,
    Octagon,
    FourPointedStar,
    Pentagram,
    Hexagram,
    Crescent,
}

impl ShapeKind {
    /// Every concrete kind, in index order.
    pub const CONCRETE: [ShapeKind; 16] = [
        ShapeKind::Triangle,
        ShapeKind::Rectangle,
        ShapeKind::RotatedRectangle,
        ShapeKind::Ellipse,
        ShapeKind::RotatedEllipse,
        ShapeKind::Circle,
        ShapeKind::QuadraticBezier,
        ShapeKind::Quadrilateral,
        ShapeKind::Square,
        ShapeKind::Pentagon,
        ShapeKind::Hexagon,
        ShapeKind::Octagon,
        ShapeKind::FourPointedStar,
        ShapeKind::Pentagram,
        ShapeKind::Hexagram,
        ShapeKind::Crescent,
    ];

    /// Kind by numeric index (`0` is `Any`).
    pub fn from_index(index: u32) -> Option<Self> {
        match index {
            0 => Some(ShapeKind::Any),
            i => Self::CONCRETE.get(i as usize - 1).copied(),
        }
    }

    pub fn index(self) -> u32 {
        self as u32
    }

    /// Canonical lower-case name.
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Any => "any",
            ShapeKind::Triangle => "triangle",
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::RotatedRectangle => "rotated-rectangle",
            ShapeKind::Ellipse => "ellipse",
            ShapeKind::RotatedEllipse => "rotated-ellipse",
            ShapeKind::Circle => "circle",
            ShapeKind::QuadraticBezier => "quadratic-bezier",
            ShapeKind::Quadrilateral => "quadrilateral",
            ShapeKind::Square => "square",
            ShapeKind::Pentagon => "pentagon",
            ShapeKind::Hexagon => "hexagon",
            ShapeKind::Octagon => "octagon",
            ShapeKind::FourPointedStar => "four-pointed-star",
            ShapeKind::Pentagram => "pentagram",
            ShapeKind::Hexagram => "hexagram",
            ShapeKind::Crescent => "crescent",
        }
    }

    /// Resolve `Any` to a uniformly chosen concrete kind.
    pub fn resolve<R: RandomSource + ?Sized>(self, rng: &mut R) -> ShapeKind {
        match self {
            ShapeKind::Any => {
                Self::CONCRETE[rng.uniform_int(Self::CONCRETE.len() as i32) as usize]
            }
            kind => kind,
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeKind {
    type Err = ShapeError;

    /// Parse a kind name (case-insensitive; `-`, `_` and spaces are
    /// interchangeable) or a numeric index.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(index) = trimmed.parse::<u32>() {
            return Self::from_index(index).ok_or_else(|| ShapeError::UnknownKind(s.to_string()));
        }
        let key: String = trimmed
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        let kind = match key.as_str() {
            "any" => ShapeKind::Any,
            "triangle" | "triangles" => ShapeKind::Triangle,
            "rectangle" | "rect" => ShapeKind::Rectangle,
            "rotatedrectangle" | "rotatedrect" => ShapeKind::RotatedRectangle,
            "ellipse" => ShapeKind::Ellipse,
            "rotatedellipse" => ShapeKind::RotatedEllipse,
            "circle" | "circles" => ShapeKind::Circle,
            "quadraticbezier" | "bezierquadratic" | "bezier" => ShapeKind::QuadraticBezier,
            "quadrilateral" | "quad" => ShapeKind::Quadrilateral,
            "square" => ShapeKind::Square,
            "pentagon" => ShapeKind::Pentagon,
            "hexagon" => ShapeKind::Hexagon,
            "octagon" => ShapeKind::Octagon,
            "fourpointedstar" | "star" => ShapeKind::FourPointedStar,
            "pentagram" => ShapeKind::Pentagram,
            "hexagram" => ShapeKind::Hexagram,
            "crescent" => ShapeKind::Crescent,
            _ => return Err(ShapeError::UnknownKind(s.to_string())),
        };
        Ok(kind)
    }
}

// ============================================================================
// Primitive
// ============================================================================

/// Parameters of one shape of any kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Triangle(Triangle),
    Rectangle(Rectangle),
    RotatedRectangle(RotatedRectangle),
    Ellipse(Ellipse),
    RotatedEllipse(RotatedEllipse),
    Circle(Circle),
    QuadraticBezier(QuadraticBezier),
    Quadrilateral(Quadrilateral),
    Square(Square),
    Pentagon(Pentagon),
    Hexagon(Hexagon),
    Octagon(Octagon),
    FourPointedStar(FourPointedStar),
    Pentagram(Pentagram),
    Hexagram(Hexagram),
    Crescent(Crescent),
}

/// Shape of any kind with its scanline cache.
pub type AnyShape = Shape<Primitive>;

macro_rules! dispatch {
    ($self:expr, $g:ident => $body:expr) => {
        match $self {
            Primitive::Triangle($g) => $body,
            Primitive::Rectangle($g) => $body,
            Primitive::RotatedRectangle($g) => $body,
            Primitive::Ellipse($g) => $body,
            Primitive::RotatedEllipse($g) => $body,
            Primitive::Circle($g) => $body,
            Primitive::QuadraticBezier($g) => $body,
            Primitive::Quadrilateral($g) => $body,
            Primitive::Square($g) => $body,
            Primitive::Pentagon($g) => $body,
            Primitive::Hexagon($g) => $body,
            Primitive::Octagon($g) => $body,
            Primitive::FourPointedStar($g) => $body,
            Primitive::Pentagram($g) => $body,
            Primitive::Hexagram($g) => $body,
            Primitive::Crescent($g) => $body,
        }
    };
}

impl Primitive {
    /// Random shape of `kind`; `Any` draws the kind first.
    pub fn random<R: RandomSource + ?Sized>(kind: ShapeKind, canvas: &Canvas, rng: &mut R) -> Self {
        let kind = kind.resolve(rng);
        debug!(
            "new random {} on {}x{} canvas",
            kind,
            canvas.width(),
            canvas.height()
        );
        match kind {
            ShapeKind::Triangle => Primitive::Triangle(Triangle::random_new(canvas, rng)),
            ShapeKind::Rectangle => Primitive::Rectangle(Rectangle::random_new(canvas, rng)),
            ShapeKind::RotatedRectangle => {
                Primitive::RotatedRectangle(RotatedRectangle::random_new(canvas, rng))
            }
            ShapeKind::Ellipse => Primitive::Ellipse(Ellipse::random_new(canvas, rng)),
            ShapeKind::RotatedEllipse => {
                Primitive::RotatedEllipse(RotatedEllipse::random_new(canvas, rng))
            }
            ShapeKind::Circle => Primitive::Circle(Circle::random_new(canvas, rng)),
            ShapeKind::QuadraticBezier => {
                Primitive::QuadraticBezier(QuadraticBezier::random_new(canvas, rng))
            }
            ShapeKind::Quadrilateral => {
                Primitive::Quadrilateral(Quadrilateral::random_new(canvas, rng))
            }
            ShapeKind::Square => Primitive::Square(Square::random_new(canvas, rng)),
            ShapeKind::Pentagon => Primitive::Pentagon(Pentagon::random_new(canvas, rng)),
            ShapeKind::Hexagon => Primitive::Hexagon(Hexagon::random_new(canvas, rng)),
            ShapeKind::Octagon => Primitive::Octagon(Octagon::random_new(canvas, rng)),
            ShapeKind::FourPointedStar => {
                Primitive::FourPointedStar(FourPointedStar::random_new(canvas, rng))
            }
            ShapeKind::Pentagram => Primitive::Pentagram(Pentagram::random_new(canvas, rng)),
            ShapeKind::Hexagram => Primitive::Hexagram(Hexagram::random_new(canvas, rng)),
            ShapeKind::Crescent => Primitive::Crescent(Crescent::random_new(canvas, rng)),
            // `resolve` never yields `Any`.
            ShapeKind::Any => Self::random(kind, canvas, rng),
        }
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Primitive::Triangle(_) => ShapeKind::Triangle,
            Primitive::Rectangle(_) => ShapeKind::Rectangle,
            Primitive::RotatedRectangle(_) => ShapeKind::RotatedRectangle,
            Primitive::Ellipse(_) => ShapeKind::Ellipse,
            Primitive::RotatedEllipse(_) => ShapeKind::RotatedEllipse,
            Primitive::Circle(_) => ShapeKind::Circle,
            Primitive::QuadraticBezier(_) => ShapeKind::QuadraticBezier,
            Primitive::Quadrilateral(_) => ShapeKind::Quadrilateral,
            Primitive::Square(_) => ShapeKind::Square,
            Primitive::Pentagon(_) => ShapeKind::Pentagon,
            Primitive::Hexagon(_) => ShapeKind::Hexagon,
            Primitive::Octagon(_) => ShapeKind::Octagon,
            Primitive::FourPointedStar(_) => ShapeKind::FourPointedStar,
            Primitive::Pentagram(_) => ShapeKind::Pentagram,
            Primitive::Hexagram(_) => ShapeKind::Hexagram,
            Primitive::Crescent(_) => ShapeKind::Crescent,
        }
    }
}

impl Geometry for Primitive {
    fn random_new<R: RandomSource + ?Sized>(canvas: &Canvas, rng: &mut R) -> Self {
        Self::random(ShapeKind::Any, canvas, rng)
    }

    fn mutate<R: RandomSource + ?Sized>(&mut self, canvas: &Canvas, rng: &mut R) {
        dispatch!(self, g => g.mutate(canvas, rng))
    }

    fn normalize(&mut self) {
        dispatch!(self, g => g.normalize())
    }

    fn path(&self) -> PathStorage {
        dispatch!(self, g => g.path())
    }

    fn svg(&self, attrs: &str) -> String {
        dispatch!(self, g => g.svg(attrs))
    }

    fn in_bounds(&self, canvas: &Canvas) -> bool {
        dispatch!(self, g => g.in_bounds(canvas))
    }

    fn rasterize(&self, canvas: &Canvas) -> Vec<Scanline> {
        dispatch!(self, g => g.rasterize(canvas))
    }
}

impl Shape<Primitive> {
    /// Random shape of `kind` with an empty cache.
    pub fn random_of_kind<R: RandomSource + ?Sized>(
        kind: ShapeKind,
        canvas: &Canvas,
        rng: &mut R,
    ) -> Self {
        Shape::new(Primitive::random(kind, canvas, rng))
    }

    pub fn kind(&self) -> ShapeKind {
        self.geometry().kind()
    }
}

// ============================================================================
// Tests
// ============================================================================
