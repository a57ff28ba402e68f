use super::types::Location;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment {
    pub location: Location,
    pub visible: bool,
}

impl Segment {
    pub fn new(location: Location) -> Self {
        Self {
            location,
            visible: true,
        }
    }
}
