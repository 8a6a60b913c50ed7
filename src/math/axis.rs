use std::fmt;

/// One of the three coordinate axes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Component index (0, 1, 2) of this axis.
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    pub fn from_name(name: &str) -> Option<Axis> {
        match name {
            "X" | "x" => Some(Axis::X),
            "Y" | "y" => Some(Axis::Y),
            "Z" | "z" => Some(Axis::Z),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[test]
fn test_axis_names() {
    for &axis in &[Axis::X, Axis::Y, Axis::Z] {
        assert_eq!(Axis::from_name(axis.name()), Some(axis));
    }
    assert_eq!(Axis::from_name("z"), Some(Axis::Z));
    assert_eq!(Axis::from_name("None"), None);
    assert_eq!(Axis::Y.index(), 1);
}
