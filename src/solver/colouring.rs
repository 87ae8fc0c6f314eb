//! Bipartite edge colouring for uniform slot domains.
//!
//! When every variable ranges over the same slots and sits in at most one
//! professor group and at most one classroom group, the model is a
//! bipartite multigraph: resources are vertices, courses are edges and
//! slots are colours. A proper colouring exists exactly when no vertex has
//! more edges than there are slots.
//!
//! # Algorithm
//!
//! Courses are coloured in variable order.
//!
//! 1. Take the first slot (canonical order) free at both the professor and
//!    the classroom.
//! 2. Otherwise pick `a`, the first slot free at the professor, and `b`,
//!    the first slot free at the classroom. Walk the path leaving the
//!    classroom along `a`, `b`, `a`, ... edges and swap `a` and `b` on it.
//!    The path never reaches the professor, so afterwards `a` is free at
//!    both ends.
//!
//! # Complexity
//! O(n · (k + V)) for n courses, k slots and V resources.
//!
//! # Reference
//! Kőnig (1916), "Gráfok és alkalmazásuk a determinánsok és a halmazok
//! elméletére"

use crate::models::{Constraint, ResourceKind, SlotSet, TimeSlot};

use super::SlotModel;

const PROFESSOR: usize = 0;
const CLASSROOM: usize = 1;

/// A model viewed as a professor/classroom multigraph.
#[derive(Debug, Clone)]
pub(crate) struct BipartiteLayout {
    /// `[professor, classroom]` vertex per variable.
    ends: Vec<[usize; 2]>,
    vertices: [usize; 2],
    slots: Vec<TimeSlot>,
}

/// Per-vertex slot occupancy: which edge holds each colour.
struct Palette {
    k: usize,
    held: [Vec<Option<usize>>; 2],
}

impl Palette {
    fn new(vertices: [usize; 2], k: usize) -> Self {
        Self {
            k,
            held: [vec![None; vertices[0] * k], vec![None; vertices[1] * k]],
        }
    }

    #[inline]
    fn get(&self, side: usize, vertex: usize, colour: usize) -> Option<usize> {
        self.held[side][vertex * self.k + colour]
    }

    #[inline]
    fn set(&mut self, side: usize, vertex: usize, colour: usize, edge: Option<usize>) {
        self.held[side][vertex * self.k + colour] = edge;
    }

    fn first_free(&self, side: usize, vertex: usize) -> Option<usize> {
        (0..self.k).find(|&c| self.get(side, vertex, c).is_none())
    }
}

impl BipartiteLayout {
    /// Returns the layout when every domain is identical and each variable
    /// belongs to at most one group per resource kind.
    pub(crate) fn of(model: &SlotModel) -> Option<Self> {
        let n = model.variable_count();
        let domains = model.domains();
        let domain = domains.first().copied().unwrap_or_else(SlotSet::empty);
        if domains.iter().any(|d| *d != domain) {
            return None;
        }

        let mut owner: [Vec<Option<usize>>; 2] = [vec![None; n], vec![None; n]];
        let mut vertices = [0usize; 2];
        for constraint in model.constraints() {
            let Constraint::AllDifferent { kind, members, .. } = constraint;
            let side = match kind {
                ResourceKind::Professor => PROFESSOR,
                ResourceKind::Classroom => CLASSROOM,
            };
            for &m in members.iter().filter(|&&m| m < n) {
                if owner[side][m].replace(vertices[side]).is_some() {
                    return None;
                }
            }
            vertices[side] += 1;
        }

        // Ungrouped variables get a private vertex
        let mut ends = Vec::with_capacity(n);
        for var in 0..n {
            let mut end = [0usize; 2];
            for side in [PROFESSOR, CLASSROOM] {
                end[side] = owner[side][var].unwrap_or_else(|| {
                    vertices[side] += 1;
                    vertices[side] - 1
                });
            }
            ends.push(end);
        }

        Some(Self {
            ends,
            vertices,
            slots: domain.to_vec(),
        })
    }

    /// Highest number of variables sharing one vertex.
    pub(crate) fn max_degree(&self) -> usize {
        let mut degree = [vec![0usize; self.vertices[0]], vec![0usize; self.vertices[1]]];
        for end in &self.ends {
            for side in [PROFESSOR, CLASSROOM] {
                degree[side][end[side]] += 1;
            }
        }
        degree.iter().flatten().copied().max().unwrap_or(0)
    }

    /// One slot per variable, or `None` when some vertex has more
    /// variables than there are slots.
    pub(crate) fn colour(&self) -> Option<Vec<TimeSlot>> {
        if self.max_degree() > self.slots.len() {
            return None;
        }

        let mut palette = Palette::new(self.vertices, self.slots.len());
        let mut colours = vec![0usize; self.ends.len()];

        for (edge, &[p, c]) in self.ends.iter().enumerate() {
            let shared = (0..self.slots.len())
                .find(|&x| palette.get(PROFESSOR, p, x).is_none() && palette.get(CLASSROOM, c, x).is_none());
            let colour = match shared {
                Some(x) => x,
                None => {
                    let a = palette.first_free(PROFESSOR, p)?;
                    let b = palette.first_free(CLASSROOM, c)?;
                    self.swap_path(&mut palette, &mut colours, c, a, b);
                    a
                }
            };

            colours[edge] = colour;
            palette.set(PROFESSOR, p, colour, Some(edge));
            palette.set(CLASSROOM, c, colour, Some(edge));
        }

        Some(colours.into_iter().map(|x| self.slots[x]).collect())
    }

    /// Swaps `a` and `b` along the alternating path that leaves classroom
    /// `start` on an `a` edge.
    fn swap_path(&self, palette: &mut Palette, colours: &mut [usize], start: usize, a: usize, b: usize) {
        let mut path = Vec::new();
        let (mut side, mut vertex, mut colour) = (CLASSROOM, start, a);
        while let Some(edge) = palette.get(side, vertex, colour) {
            path.push(edge);
            side = 1 - side;
            vertex = self.ends[edge][side];
            colour = if colour == a { b } else { a };
        }

        for &edge in &path {
            for s in [PROFESSOR, CLASSROOM] {
                palette.set(s, self.ends[edge][s], colours[edge], None);
            }
        }
        for &edge in &path {
            colours[edge] = if colours[edge] == a { b } else { a };
            for s in [PROFESSOR, CLASSROOM] {
                palette.set(s, self.ends[edge][s], colours[edge], Some(edge));
            }
        }
    }
}
