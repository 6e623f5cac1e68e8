//! Markers: the interactive points placed on the sphere.

use crate::apps::AppEntry;
use crate::error::LayoutError;
use crate::layout::fibonacci_sphere;
use fnv::FnvHashMap;
use glam::Vec3;

/// One selectable icon on the globe.
///
/// `position` is fixed at layout time and never moves afterwards; only
/// the selection flag is mutable, and only through [`MarkerSet`].
#[derive(Clone, Debug)]
pub struct Marker {
    pub slug: &'static str,
    pub name: &'static str,
    pub glyph: &'static str,
    pub color: [f32; 3],
    pub position: Vec3,
    pub selected: bool,
}

/// The static marker population, built once from the catalog. Index order
/// matches catalog order, which matches layout order.
pub struct MarkerSet {
    markers: Vec<Marker>,
    index_by_slug: FnvHashMap<&'static str, usize>,
}

impl MarkerSet {
    /// Lay the given catalog entries out on a sphere of `radius`.
    pub fn on_sphere(entries: &'static [AppEntry], radius: f32) -> Result<Self, LayoutError> {
        let positions = fibonacci_sphere(entries.len(), radius)?;
        let markers: Vec<Marker> = entries
            .iter()
            .zip(positions)
            .map(|(entry, position)| Marker {
                slug: entry.slug,
                name: entry.name,
                glyph: entry.glyph,
                color: entry.color_rgb(),
                position,
                selected: false,
            })
            .collect();
        let index_by_slug = markers
            .iter()
            .enumerate()
            .map(|(i, m)| (m.slug, i))
            .collect();
        Ok(Self {
            markers,
            index_by_slug,
        })
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn get(&self, index: usize) -> Option<&Marker> {
        self.markers.get(index)
    }

    pub fn index_of(&self, slug: &str) -> Option<usize> {
        self.index_by_slug.get(slug).copied()
    }

    /// Select exactly one marker by index, clearing any previous selection.
    /// Selection is independent of visibility: a hidden marker stays
    /// selected until something else is picked.
    pub fn select_only(&mut self, index: usize) -> bool {
        if index >= self.markers.len() {
            return false;
        }
        for (i, m) in self.markers.iter_mut().enumerate() {
            m.selected = i == index;
        }
        true
    }

    pub fn select_slug(&mut self, slug: &str) -> bool {
        match self.index_of(slug) {
            Some(i) => self.select_only(i),
            None => false,
        }
    }

    pub fn clear_selection(&mut self) {
        for m in &mut self.markers {
            m.selected = false;
        }
    }

    pub fn selected(&self) -> Option<&Marker> {
        self.markers.iter().find(|m| m.selected)
    }
}
