use cropguide_ai::{Classification, CropCatalog};

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn classification_to_json(c: &Classification) -> serde_json::Value {
    serde_json::json!({
        "cluster_id": c.cluster_id,
        "crops": c.crops,
        "crop_names": c.joined_crop_names(),
    })
}

pub fn catalog_to_json(catalog: &CropCatalog) -> serde_json::Value {
    serde_json::json!({
        "clusters": catalog.entries().map(|(id, crops)| serde_json::json!({
            "cluster_id": id,
            "crops": crops,
        })).collect::<Vec<_>>()
    })
}
