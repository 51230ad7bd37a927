use super::element::Element;
use nalgebra::Point3;
use std::collections::BTreeMap;
use std::ops::Index;
use thiserror::Error;

/// A single atom position in one frame, in the units of the source file.
pub type Coordinate = Point3<f32>;

/// The shape of a trajectory file derived from its header and total line count.
///
/// Every frame occupies `atom_count + 2` lines: the atom count header, a comment line and
/// one line per atom. The frame count is the number of complete frames that fit into the
/// text; lines left over after the last complete frame are not part of any frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameGeometry {
    atom_count: usize,
    frame_count: usize,
}

impl FrameGeometry {
    /// Number of non-atom lines that open every frame (atom count and comment).
    pub const HEADER_LINES: usize = 2;

    /// Computes the geometry of a text with `total_lines` lines and the given atom count.
    ///
    /// # Return
    ///
    /// Returns `None` if `atom_count` is zero or so large that the frame length overflows.
    pub fn from_line_count(atom_count: usize, total_lines: usize) -> Option<Self> {
        if atom_count == 0 {
            return None;
        }
        let lines_per_frame = atom_count.checked_add(Self::HEADER_LINES)?;
        Some(Self {
            atom_count,
            frame_count: total_lines / lines_per_frame,
        })
    }

    pub fn atom_count(&self) -> usize {
        self.atom_count
    }

    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    pub fn lines_per_frame(&self) -> usize {
        self.atom_count + Self::HEADER_LINES
    }

    /// Zero-based index of the atom count header of `frame`.
    pub fn frame_start(&self, frame: usize) -> usize {
        frame * self.lines_per_frame()
    }

    /// Zero-based index of the comment line of `frame`.
    pub fn comment_line(&self, frame: usize) -> usize {
        self.frame_start(frame) + 1
    }

    /// Zero-based index of the line holding `atom` in `frame`.
    pub fn atom_line(&self, frame: usize, atom: usize) -> usize {
        self.frame_start(frame) + Self::HEADER_LINES + atom
    }

    /// Number of lines covered by complete frames.
    pub fn consumed_lines(&self) -> usize {
        self.frame_count * self.lines_per_frame()
    }
}

/// Errors raised when trajectory parts with inconsistent shapes are combined.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrajectoryShapeError {
    #[error("a trajectory must contain at least one atom")]
    NoAtoms,
    #[error("a trajectory must contain at least one frame")]
    NoFrames,
    #[error("frame {frame} has {found} positions, expected {expected}")]
    RaggedFrame {
        frame: usize,
        expected: usize,
        found: usize,
    },
    #[error("{atom_types} atom types given for a table with {atoms} atoms")]
    AtomTypeCount { atom_types: usize, atoms: usize },
    #[error("{comments} comments given for a table with {frames} frames")]
    CommentCount { comments: usize, frames: usize },
}

/// A dense `atom_count × frame_count` table of positions.
///
/// Positions are stored atom-major, so the path of one atom over the whole trajectory is a
/// contiguous slice (see [`TrajectoryTable::atom_path`]). The table can be indexed with an
/// `(atom, frame)` pair.
#[derive(Debug, Clone, PartialEq)]
pub struct TrajectoryTable {
    atom_count: usize,
    frame_count: usize,
    positions: Vec<Coordinate>,
}

impl TrajectoryTable {
    pub(crate) fn zeroed(atom_count: usize, frame_count: usize) -> Self {
        Self {
            atom_count,
            frame_count,
            positions: vec![Point3::origin(); atom_count * frame_count],
        }
    }

    /// Builds a table from frame-ordered position lists (`frames[frame][atom]`).
    ///
    /// # Errors
    ///
    /// Returns an error if there are no frames, the first frame is empty, or any frame has a
    /// different number of positions than the first one.
    pub fn from_frames(frames: Vec<Vec<Coordinate>>) -> Result<Self, TrajectoryShapeError> {
        let atom_count = frames.first().ok_or(TrajectoryShapeError::NoFrames)?.len();
        if atom_count == 0 {
            return Err(TrajectoryShapeError::NoAtoms);
        }

        let mut table = Self::zeroed(atom_count, frames.len());
        for (frame, positions) in frames.into_iter().enumerate() {
            if positions.len() != atom_count {
                return Err(TrajectoryShapeError::RaggedFrame {
                    frame,
                    expected: atom_count,
                    found: positions.len(),
                });
            }
            for (atom, position) in positions.into_iter().enumerate() {
                table.set(atom, frame, position);
            }
        }
        Ok(table)
    }

    pub fn atom_count(&self) -> usize {
        self.atom_count
    }

    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    /// Returns `(atom_count, frame_count)`.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.atom_count, self.frame_count)
    }

    pub fn get(&self, atom: usize, frame: usize) -> Option<&Coordinate> {
        if atom < self.atom_count && frame < self.frame_count {
            self.positions.get(atom * self.frame_count + frame)
        } else {
            None
        }
    }

    pub(crate) fn set(&mut self, atom: usize, frame: usize, position: Coordinate) {
        self.positions[atom * self.frame_count + frame] = position;
    }

    /// Positions of one atom in every frame, in frame order.
    pub fn atom_path(&self, atom: usize) -> Option<&[Coordinate]> {
        if atom >= self.atom_count {
            return None;
        }
        let start = atom * self.frame_count;
        Some(&self.positions[start..start + self.frame_count])
    }

    /// Positions of every atom in one frame, in atom order.
    pub fn frame(&self, frame: usize) -> Option<impl Iterator<Item = &Coordinate> + '_> {
        (frame < self.frame_count).then(move || {
            (0..self.atom_count).map(move |atom| &self.positions[atom * self.frame_count + frame])
        })
    }
}

impl Index<(usize, usize)> for TrajectoryTable {
    type Output = Coordinate;

    fn index(&self, (atom, frame): (usize, usize)) -> &Self::Output {
        self.get(atom, frame).unwrap_or_else(|| {
            panic!(
                "position ({atom}, {frame}) out of bounds for a {}x{} trajectory table",
                self.atom_count, self.frame_count
            )
        })
    }
}

/// A fully validated trajectory: atom types, per-frame comments and the coordinate table.
///
/// A `DecodedTrajectory` only exists in a consistent state. The number of atom types always
/// equals the number of table rows and the number of comments always equals the number of
/// frames. Values produced by the decoder are complete; there is no partially filled form.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedTrajectory {
    atom_types: Vec<Element>,
    comments: Vec<String>,
    coordinates: TrajectoryTable,
}

impl DecodedTrajectory {
    /// Combines independently built parts into a trajectory.
    ///
    /// # Arguments
    ///
    /// * `atom_types` - The element of every atom slot, in atom order.
    /// * `comments` - The comment line of every frame, in frame order.
    /// * `coordinates` - The position table.
    ///
    /// # Errors
    ///
    /// Returns [`TrajectoryShapeError`] if the parts disagree on the number of atoms or
    /// frames.
    pub fn new(
        atom_types: Vec<Element>,
        comments: Vec<String>,
        coordinates: TrajectoryTable,
    ) -> Result<Self, TrajectoryShapeError> {
        if atom_types.len() != coordinates.atom_count() {
            return Err(TrajectoryShapeError::AtomTypeCount {
                atom_types: atom_types.len(),
                atoms: coordinates.atom_count(),
            });
        }
        if comments.len() != coordinates.frame_count() {
            return Err(TrajectoryShapeError::CommentCount {
                comments: comments.len(),
                frames: coordinates.frame_count(),
            });
        }
        Ok(Self::assemble(atom_types, comments, coordinates))
    }

    pub(crate) fn assemble(
        atom_types: Vec<Element>,
        comments: Vec<String>,
        coordinates: TrajectoryTable,
    ) -> Self {
        debug_assert_eq!(atom_types.len(), coordinates.atom_count());
        debug_assert_eq!(comments.len(), coordinates.frame_count());
        Self {
            atom_types,
            comments,
            coordinates,
        }
    }

    pub fn atom_types(&self) -> &[Element] {
        &self.atom_types
    }

    pub fn comments(&self) -> &[String] {
        &self.comments
    }

    pub fn coordinates(&self) -> &TrajectoryTable {
        &self.coordinates
    }

    pub fn atom_count(&self) -> usize {
        self.atom_types.len()
    }

    pub fn frame_count(&self) -> usize {
        self.coordinates.frame_count()
    }

    /// Counts the atoms of each element.
    pub fn composition(&self) -> BTreeMap<Element, usize> {
        let mut counts = BTreeMap::new();
        for element in &self.atom_types {
            *counts.entry(*element).or_insert(0) += 1;
        }
        counts
    }

    /// Consumes the trajectory and returns its parts.
    pub fn into_parts(self) -> (Vec<Element>, Vec<String>, TrajectoryTable) {
        (self.atom_types, self.comments, self.coordinates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_frame_table() -> TrajectoryTable {
        TrajectoryTable::from_frames(vec![
            vec![Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 1.0)],
            vec![Point3::new(0.5, 0.0, 0.0), Point3::new(1.5, 1.0, 1.0)],
        ])
        .unwrap()
    }

    #[test]
    fn geometry_truncates_partial_frames() {
        let geometry = FrameGeometry::from_line_count(2, 9).unwrap();
        assert_eq!(geometry.lines_per_frame(), 4);
        assert_eq!(geometry.frame_count(), 2);
        assert_eq!(geometry.consumed_lines(), 8);
    }

    #[test]
    fn geometry_line_indices_skip_frame_headers() {
        let geometry = FrameGeometry::from_line_count(3, 10).unwrap();
        assert_eq!(geometry.frame_start(1), 5);
        assert_eq!(geometry.comment_line(1), 6);
        assert_eq!(geometry.atom_line(0, 0), 2);
        assert_eq!(geometry.atom_line(1, 2), 9);
    }

    #[test]
    fn geometry_rejects_zero_and_overflowing_atom_counts() {
        assert!(FrameGeometry::from_line_count(0, 10).is_none());
        assert!(FrameGeometry::from_line_count(usize::MAX, 10).is_none());
        assert!(FrameGeometry::from_line_count(usize::MAX - 2, 10).is_some());
    }

    #[test]
    fn table_is_indexed_by_atom_then_frame() {
        let table = two_frame_table();
        assert_eq!(table.dimensions(), (2, 2));
        assert_eq!(table[(0, 1)], Point3::new(0.5, 0.0, 0.0));
        assert_eq!(table[(1, 0)], Point3::new(1.0, 1.0, 1.0));
        assert_eq!(table.get(2, 0), None);
        assert_eq!(table.get(0, 2), None);
    }

    #[test]
    fn atom_path_and_frame_views_agree_with_indexing() {
        let table = two_frame_table();
        assert_eq!(
            table.atom_path(1).unwrap(),
            &[Point3::new(1.0, 1.0, 1.0), Point3::new(1.5, 1.0, 1.0)]
        );
        let frame: Vec<_> = table.frame(1).unwrap().copied().collect();
        assert_eq!(
            frame,
            vec![Point3::new(0.5, 0.0, 0.0), Point3::new(1.5, 1.0, 1.0)]
        );
        assert!(table.atom_path(2).is_none());
        assert!(table.frame(2).is_none());
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn indexing_out_of_bounds_panics() {
        let table = two_frame_table();
        let _position = table[(0, 5)];
    }

    #[test]
    fn from_frames_rejects_ragged_and_empty_input() {
        assert_eq!(
            TrajectoryTable::from_frames(vec![]),
            Err(TrajectoryShapeError::NoFrames)
        );
        assert_eq!(
            TrajectoryTable::from_frames(vec![vec![]]),
            Err(TrajectoryShapeError::NoAtoms)
        );
        assert_eq!(
            TrajectoryTable::from_frames(vec![
                vec![Point3::origin(), Point3::origin()],
                vec![Point3::origin()],
            ]),
            Err(TrajectoryShapeError::RaggedFrame {
                frame: 1,
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn new_trajectory_checks_part_shapes() {
        let err = DecodedTrajectory::new(
            vec![Element::C],
            vec!["a".into(), "b".into()],
            two_frame_table(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            TrajectoryShapeError::AtomTypeCount {
                atom_types: 1,
                atoms: 2
            }
        );

        let err = DecodedTrajectory::new(
            vec![Element::C, Element::H],
            vec!["only one".into()],
            two_frame_table(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            TrajectoryShapeError::CommentCount {
                comments: 1,
                frames: 2
            }
        );
    }

    #[test]
    fn composition_counts_each_element() {
        let table = TrajectoryTable::from_frames(vec![vec![Point3::origin(); 4]]).unwrap();
        let trajectory = DecodedTrajectory::new(
            vec![Element::O, Element::H, Element::H, Element::Br],
            vec![String::new()],
            table,
        )
        .unwrap();

        let composition = trajectory.composition();
        assert_eq!(composition.get(&Element::H), Some(&2));
        assert_eq!(composition.get(&Element::O), Some(&1));
        assert_eq!(composition.get(&Element::Br), Some(&1));
        assert_eq!(composition.get(&Element::C), None);
    }
}
