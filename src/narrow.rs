use std::any::Any;

/// Capability query: can a subject of type `Self` be viewed as a `T`?
///
/// This is how a clause decides whether the subject's runtime type matches
/// the candidate type. Every sized type narrows to itself. Closed hierarchies
/// (usually an enum over their concrete types) implement `Narrow<Variant>`
/// for each variant they can be viewed as; open hierarchies can match
/// against `dyn Any` instead, which narrows through `downcast_ref`.
///
/// ```
/// use fluent_pattern_match::Narrow;
///
/// struct Circle(f64);
/// struct Square(f64);
/// enum Shape { Circle(Circle), Square(Square) }
///
/// impl Narrow<Circle> for Shape {
///     fn narrow(&self) -> Option<&Circle> {
///         match self {
///             Shape::Circle(c) => Some(c),
///             _ => None,
///         }
///     }
/// }
///
/// let shape = Shape::Circle(Circle(1.0));
/// assert!(Narrow::<Circle>::narrow(&shape).is_some());
/// # let _ = Square(0.0);
/// ```
pub trait Narrow<T: ?Sized> {
    fn narrow(&self) -> Option<&T>;
}

// Unsized types too: `str`, `[T]`, `dyn Trait` all match their own type.
impl<T: ?Sized> Narrow<T> for T {
    fn narrow(&self) -> Option<&T> {
        Some(self)
    }
}

impl<T: Any> Narrow<T> for dyn Any {
    fn narrow(&self) -> Option<&T> {
        self.downcast_ref::<T>()
    }
}

impl<T: Any> Narrow<T> for dyn Any + Send {
    fn narrow(&self) -> Option<&T> {
        self.downcast_ref::<T>()
    }
}

impl<T: Any> Narrow<T> for dyn Any + Send + Sync {
    fn narrow(&self) -> Option<&T> {
        self.downcast_ref::<T>()
    }
}
