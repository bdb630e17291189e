//! Static cluster → crop recommendation table.
//!
//! The table is authored data, not derived from the clustering model: some
//! crops (Pigeonpeas, Papaya, Lentil) deliberately appear under several
//! clusters.

use serde::Serialize;

use cropguide_core::ValueObject;

/// Cluster identifier as emitted by the cluster model.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ClusterId(i64);

impl ClusterId {
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn from_index(index: usize) -> Self {
        Self(i64::try_from(index).unwrap_or(i64::MAX))
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl core::fmt::Display for ClusterId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// One recommended crop. `image` is a bare filename resolved by the
/// presentation layer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct CropEntry {
    pub name: &'static str,
    pub image: &'static str,
}

impl ValueObject for CropEntry {}

const fn crop(name: &'static str, image: &'static str) -> CropEntry {
    CropEntry { name, image }
}

const PIGEONPEAS: CropEntry = crop("Pigeonpeas", "pigeonpeas.jpg");
const MOTH_BEANS: CropEntry = crop("Moth Beans", "mothbeans.jpg");
const MUNG_BEAN: CropEntry = crop("Mung Bean", "mungbean.jpg");
const BLACK_GRAM: CropEntry = crop("Black Gram", "blackgram.jpg");
const LENTIL: CropEntry = crop("Lentil", "lentil.jpg");
const MANGO: CropEntry = crop("Mango", "mango.jpg");
const ORANGE: CropEntry = crop("Orange", "orange.jpg");
const PAPAYA: CropEntry = crop("Papaya", "papaya.jpg");
const MAIZE: CropEntry = crop("Maize", "maize.jpg");
const BANANA: CropEntry = crop("Banana", "banana.jpg");
const COCONUT: CropEntry = crop("Coconut", "coconut.jpg");
const COTTON: CropEntry = crop("Cotton", "cotton.jpg");
const JUTE: CropEntry = crop("Jute", "jute.jpg");
const COFFEE: CropEntry = crop("Coffee", "coffee.jpg");
const GRAPES: CropEntry = crop("Grapes", "grapes.jpg");
const APPLE: CropEntry = crop("Apple", "apple.jpg");
const POMEGRANATE: CropEntry = crop("Pomegranate", "pomegranate.jpg");
const RICE: CropEntry = crop("Rice", "rice.jpg");
const WATERMELON: CropEntry = crop("Watermelon", "watermelon.jpg");
const MUSKMELON: CropEntry = crop("Muskmelon", "muskmelon.jpg");
const CHICKPEA: CropEntry = crop("Chickpea", "chickpea.jpg");
const KIDNEY_BEANS: CropEntry = crop("Kidney Beans", "kidneybeans.jpg");

/// Returned for any cluster ID the table does not know.
pub const UNKNOWN_CROPS: &[CropEntry] = &[crop("Unknown", "default.jpg")];

const BUILTIN: &[(ClusterId, &[CropEntry])] = &[
    (
        ClusterId::new(0),
        &[PIGEONPEAS, MOTH_BEANS, MUNG_BEAN, BLACK_GRAM, LENTIL, MANGO, ORANGE, PAPAYA],
    ),
    (
        ClusterId::new(1),
        &[MAIZE, LENTIL, BANANA, PAPAYA, COCONUT, COTTON, JUTE, COFFEE],
    ),
    (ClusterId::new(2), &[GRAPES, APPLE]),
    (ClusterId::new(3), &[PIGEONPEAS, POMEGRANATE, ORANGE, PAPAYA, COCONUT]),
    (ClusterId::new(4), &[RICE, PIGEONPEAS, PAPAYA, COCONUT, JUTE, COFFEE]),
    (ClusterId::new(5), &[PIGEONPEAS, MOTH_BEANS, LENTIL, MANGO]),
    (ClusterId::new(6), &[WATERMELON, MUSKMELON]),
    (ClusterId::new(7), &[CHICKPEA, KIDNEY_BEANS, PIGEONPEAS, LENTIL]),
];

/// Read-only crop catalog.
#[derive(Debug, Copy, Clone)]
pub struct CropCatalog {
    table: &'static [(ClusterId, &'static [CropEntry])],
}

impl Default for CropCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl CropCatalog {
    /// The compiled-in table (clusters 0–7).
    pub const fn builtin() -> Self {
        Self { table: BUILTIN }
    }

    /// Crops for `cluster_id`, or [`UNKNOWN_CROPS`]. Total and pure.
    pub fn lookup(&self, cluster_id: ClusterId) -> &'static [CropEntry] {
        self.table
            .iter()
            .find(|(id, _)| *id == cluster_id)
            .map(|(_, crops)| *crops)
            .unwrap_or(UNKNOWN_CROPS)
    }

    /// All known clusters in ascending ID order.
    pub fn entries(&self) -> impl Iterator<Item = (ClusterId, &'static [CropEntry])> + '_ {
        self.table.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn names(crops: &[CropEntry]) -> Vec<&str> {
        crops.iter().map(|c| c.name).collect()
    }

    #[test]
    fn builtin_cluster_sizes() {
        let catalog = CropCatalog::builtin();
        let sizes: Vec<usize> = (0..8).map(|i| catalog.lookup(ClusterId::new(i)).len()).collect();
        assert_eq!(sizes, [8, 8, 2, 5, 6, 4, 2, 4]);
        assert_eq!(catalog.len(), 8);
    }

    #[test]
    fn cluster_four_is_rice_group_in_order() {
        let crops = CropCatalog::builtin().lookup(ClusterId::new(4));
        assert_eq!(
            names(crops),
            ["Rice", "Pigeonpeas", "Papaya", "Coconut", "Jute", "Coffee"]
        );
        assert_eq!(crops[0].image, "rice.jpg");
    }

    #[test]
    fn images_follow_name_convention() {
        for (_, crops) in CropCatalog::builtin().entries() {
            for c in crops {
                let expected = format!("{}.jpg", c.name.to_lowercase().replace(' ', ""));
                assert_eq!(c.image, expected);
            }
        }
    }

    #[test]
    fn unknown_cluster_resolves_to_sentinel() {
        let catalog = CropCatalog::builtin();
        for id in [-1, 8, 42, i64::MAX, i64::MIN] {
            assert_eq!(
                catalog.lookup(ClusterId::new(id)),
                &[CropEntry { name: "Unknown", image: "default.jpg" }]
            );
        }
    }

    #[test]
    fn entries_are_in_ascending_order() {
        let ids: Vec<i64> = CropCatalog::builtin().entries().map(|(id, _)| id.get()).collect();
        assert_eq!(ids, (0..8).collect::<Vec<_>>());
    }

    proptest! {
        /// Lookup is total and deterministic over every integer.
        #[test]
        fn lookup_is_total_and_deterministic(id in any::<i64>()) {
            let catalog = CropCatalog::builtin();
            let first = catalog.lookup(ClusterId::new(id));
            let second = catalog.lookup(ClusterId::new(id));
            prop_assert!(!first.is_empty());
            prop_assert_eq!(first, second);
            if !(0..8).contains(&id) {
                prop_assert_eq!(first, UNKNOWN_CROPS);
            }
        }
    }
}
