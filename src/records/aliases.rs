//! Alias tables, one block per entity.
//!
//! Candidates are tried in order; the first present value wins.

use crate::extraction::FieldAliases;

// Shared by both record types.
pub const ID: FieldAliases = FieldAliases::new("id", &["id", "uuid"]);
pub const CREATED_AT: FieldAliases =
    FieldAliases::new("created_at", &["created_at", "createdAt", "inserted_at", "date"]);
pub const TRUCK_NUMBER: FieldAliases = FieldAliases::new(
    "truck_number",
    &["truck_number", "truckNumber", "truck_no", "truck", "vehicle_number"],
);
pub const INSPECTOR_NAME: FieldAliases = FieldAliases::new(
    "inspector_name",
    &["inspector_name", "inspectorName", "inspector", "inspector.name"],
);
pub const DEPOT: FieldAliases = FieldAliases::new("depot", &["depot", "depot_name", "depot.name"]);
pub const INSPECTOR_SIGNATURE: FieldAliases = FieldAliases::new(
    "inspector_signature",
    &["inspector_signature", "inspectorSignature", "inspector_sign"],
);

// Inspections.
pub const DRIVER_NAME: FieldAliases = FieldAliases::new(
    "driver_name",
    &["driver_name", "driverName", "driver", "driver.name"],
);
pub const TRANSPORTER: FieldAliases = FieldAliases::new(
    "transporter",
    &["transporter", "transporter_name", "transporterName"],
);
pub const STATUS: FieldAliases = FieldAliases::new("status", &["status", "inspection_status"]);
pub const OUTCOME: FieldAliases = FieldAliases::new(
    "outcome",
    // `status` last: some rows keep the verdict only there
    &["overall_status", "overallStatus", "outcome", "result", "final_status", "status"],
);
pub const CHECKLIST: FieldAliases = FieldAliases::new(
    "items",
    &["items", "checklist", "checklist_items", "checklistItems", "inspection_items"],
);
pub const DRIVER_SIGNATURE: FieldAliases = FieldAliases::new(
    "driver_signature",
    &["driver_signature", "driverSignature", "driver_sign"],
);

// Checklist items.
pub const ITEM_NAME: FieldAliases = FieldAliases::new("name", &["name", "title", "label"]);
pub const ITEM_DESCRIPTION: FieldAliases =
    FieldAliases::new("description", &["description", "desc", "details"]);
pub const ITEM_STATUS: FieldAliases = FieldAliases::new("status", &["status", "result"]);
pub const ITEM_SEVERITY: FieldAliases = FieldAliases::new("severity", &["severity", "priority"]);
pub const ITEM_NOTE: FieldAliases = FieldAliases::new("note", &["note", "notes", "comment", "remarks"]);
pub const ITEM_IMAGE: FieldAliases =
    FieldAliases::new("image", &["image", "photo", "image_url", "imageUrl", "picture"]);

// Quality reports.
pub const PRODUCT: FieldAliases = FieldAliases::new("product", &["product", "product_name", "productName"]);
pub const COMPANY_NAME: FieldAliases = FieldAliases::new(
    "company_name",
    &["company_name", "companyName", "company", "company.name"],
);
pub const SEALER_NAME: FieldAliases =
    FieldAliases::new("sealer_name", &["sealer_name", "sealerName", "sealer"]);
pub const COMPARTMENTS: FieldAliases =
    FieldAliases::new("compartments", &["compartments", "compartment_details", "tanks"]);
pub const QUALITY_PARAMS: FieldAliases = FieldAliases::new(
    "quality_params",
    &["quality_params", "qualityParams", "quality_parameters", "params"],
);
pub const SEALER_SIGNATURE: FieldAliases = FieldAliases::new(
    "sealer_signature",
    &["sealer_signature", "sealerSignature", "sealer_sign"],
);

// Compartments.
pub const COMPARTMENT_ID: FieldAliases = FieldAliases::new(
    "id",
    &["id", "compartment", "compartment_no", "compartment_number", "number", "no"],
);
pub const LITRES: FieldAliases =
    FieldAliases::new("litres", &["litres", "liters", "qty", "quantity", "volume"]);
pub const CERTIFICATE_LEVEL: FieldAliases = FieldAliases::new(
    "certificate_level",
    &["certificate_level", "certificateLevel", "cert_level", "certificate"],
);
pub const PRODUCT_LEVEL: FieldAliases = FieldAliases::new(
    "product_level",
    &["product_level", "productLevel", "prod_level"],
);
pub const SEAL_NUMBER: FieldAliases =
    FieldAliases::new("seal_number", &["seal_number", "sealNumber", "sealNo", "seal_no", "seal"]);

// Quality parameter list entries.
pub const PARAM_NAME: FieldAliases = FieldAliases::new("name", &["name", "label", "key", "parameter"]);
pub const PARAM_VALUE: FieldAliases = FieldAliases::new("value", &["value", "reading", "result"]);
