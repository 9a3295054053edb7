//! Bounding Volume Hierarchy (BVH) acceleration structure.
//!
//! A binary tree whose nodes each own exactly two children and cache the
//! union of their boxes. Tree shape depends on a random split axis per
//! level; traversal always reports the same closest hit as a linear scan
//! of the same objects.

use crate::{HitRecord, Hittable, HittableList};
use rand::{Rng, RngCore};
use std::cmp::Ordering;
use std::sync::Arc;
use thiserror::Error;
use umbra_math::{Aabb, Interval, Ray};

/// Errors that can occur while building a BVH.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum BvhError {
    #[error("cannot build a BVH over an empty object list")]
    Empty,

    #[error("object {index} has no bounding box")]
    Unbounded { index: usize },
}

/// An object paired with its precomputed bounding box.
struct Entry {
    object: Arc<dyn Hittable>,
    bbox: Aabb,
}

impl Entry {
    /// Sort key: minimum corner on `axis`.
    #[inline]
    fn key(&self, axis: usize) -> f64 {
        self.bbox.axis_interval(axis).min
    }
}

/// BVH node with two children.
///
/// A single-object subtree stores that object as both children.
pub struct BvhNode {
    left: Arc<dyn Hittable>,
    right: Arc<dyn Hittable>,
    bbox: Aabb,
}

impl BvhNode {
    /// Create a BVH from a list of hittable objects.
    ///
    /// Every object must report a bounding box.
    pub fn new(objects: Vec<Arc<dyn Hittable>>, rng: &mut dyn RngCore) -> Result<Self, BvhError> {
        if objects.is_empty() {
            return Err(BvhError::Empty);
        }

        let count = objects.len();
        let entries = objects
            .into_iter()
            .enumerate()
            .map(|(index, object)| {
                let bbox = object.bounding_box().ok_or(BvhError::Unbounded { index })?;
                Ok(Entry { object, bbox })
            })
            .collect::<Result<Vec<_>, BvhError>>()?;

        let node = Self::build(entries, rng);
        log::info!("Built BVH over {} objects, bounds {:?}", count, node.bbox);
        Ok(node)
    }

    /// Build over the contents of a list.
    pub fn from_list(list: HittableList, rng: &mut dyn RngCore) -> Result<Self, BvhError> {
        Self::new(list.into_objects(), rng)
    }

    /// Recursive construction; `entries` is never empty.
    fn build(mut entries: Vec<Entry>, rng: &mut dyn RngCore) -> Self {
        let axis = rng.gen_range(0..3);

        let (left, left_box, right, right_box) = match entries.len() {
            1 => {
                let only = &entries[0];
                (only.object.clone(), only.bbox, only.object.clone(), only.bbox)
            }
            2 => {
                let (first, second) = (&entries[0], &entries[1]);
                // Strictly smaller key goes left; ties put the second object on the left
                let (l, r) = if first.key(axis) < second.key(axis) {
                    (first, second)
                } else {
                    (second, first)
                };
                (l.object.clone(), l.bbox, r.object.clone(), r.bbox)
            }
            n => {
                // Stable sort so equal keys keep their input order
                entries.sort_by(|a, b| {
                    a.key(axis)
                        .partial_cmp(&b.key(axis))
                        .unwrap_or(Ordering::Equal)
                });

                let right_entries = entries.split_off(n / 2);
                let left = Self::build(entries, rng);
                let right = Self::build(right_entries, rng);
                let (left_box, right_box) = (left.bbox, right.bbox);
                (
                    Arc::new(left) as Arc<dyn Hittable>,
                    left_box,
                    Arc::new(right) as Arc<dyn Hittable>,
                    right_box,
                )
            }
        };

        Self {
            left,
            right,
            bbox: Aabb::surrounding(&left_box, &right_box),
        }
    }

    /// Cached union of both children's boxes.
    pub fn bbox(&self) -> Aabb {
        self.bbox
    }
}

impl Hittable for BvhNode {
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval, rec: &mut HitRecord<'a>) -> bool {
        if !self.bbox.hit(ray, ray_t) {
            return false;
        }

        let hit_left = self.left.hit(ray, ray_t, rec);

        // Only check right up to closest hit
        let right_max = if hit_left { rec.t } else { ray_t.max };
        let hit_right = self.right.hit(ray, ray_t.with_max(right_max), rec);

        hit_left || hit_right
    }

    fn bounding_box(&self) -> Option<Aabb> {
        Some(self.bbox)
    }
}
