//! Module holding the static registry of singleLevel semantic models and their JSON skeletons.

use std::{fmt, str::FromStr};

use serde_json::{Value, json};

use crate::{
    Error,
    domain::{ID_PREFIX, ModelTemplate},
};

/// The semantic models for which fixture trees can be generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SemanticModel {
    BomAsBuilt300,
    BomAsPlanned200,
    BomAsPlanned300,
    BomAsSpecified200,
    UsageAsBuilt300,
    UsageAsPlanned110,
}

impl SemanticModel {
    pub const ALL: [SemanticModel; 6] = [
        SemanticModel::BomAsBuilt300,
        SemanticModel::BomAsPlanned200,
        SemanticModel::BomAsPlanned300,
        SemanticModel::BomAsSpecified200,
        SemanticModel::UsageAsBuilt300,
        SemanticModel::UsageAsPlanned110,
    ];

    /// All registry keys, in registry order
    pub fn names() -> [&'static str; 6] {
        SemanticModel::ALL.map(|model| model.as_str())
    }

    /// The registry key of the model, e.g. `bom-as-built-3.0.0`
    pub fn as_str(&self) -> &'static str {
        match self {
            SemanticModel::BomAsBuilt300 => "bom-as-built-3.0.0",
            SemanticModel::BomAsPlanned200 => "bom-as-planned-2.0.0",
            SemanticModel::BomAsPlanned300 => "bom-as-planned-3.0.0",
            SemanticModel::BomAsSpecified200 => "bom-as-specified-2.0.0",
            SemanticModel::UsageAsBuilt300 => "usage-as-built-3.0.0",
            SemanticModel::UsageAsPlanned110 => "usage-as-planned-1.1.0",
        }
    }

    pub(crate) fn template(&self) -> ModelTemplate {
        match self {
            SemanticModel::BomAsBuilt300 => ModelTemplate {
                name: self.as_str(),
                main_item: json!({
                    "catenaXId": "",
                    "childItems": []
                }),
                relationship_item: json!({
                    "catenaXId": "",
                    "quantity": {
                        "value": 0.2014,
                        "unit": "unit:kilogram"
                    },
                    "hasAlternatives": true,
                    "businessPartner": "BPNL00000000TEST",
                    "createdOn": "2022-02-03T14:48:54.709Z",
                    "lastModifiedOn": "2022-02-03T14:48:54.709Z"
                }),
                main_item_id_key: "catenaXId",
                relationships_key: "childItems",
                relationship_item_id_key: "catenaXId",
                id_prefix: ID_PREFIX,
            },
            SemanticModel::BomAsPlanned200 => ModelTemplate {
                name: self.as_str(),
                main_item: json!({
                    "catenaXId": "",
                    "childItems": []
                }),
                relationship_item: json!({
                    "validityPeriod": {
                        "validFrom": "2023-03-21T08:17:29.187+01:00",
                        "validTo": "2024-07-01T16:10:00.000+01:00"
                    },
                    "catenaXId": "",
                    "quantity": {
                        "quantityNumber": 1,
                        "measurementUnit": "unit:litre"
                    },
                    "businessPartner": "BPNL00000000TEST",
                    "createdOn": "2022-02-03T14:48:54.709Z",
                    "lastModifiedOn": "2022-02-03T14:48:54.709Z"
                }),
                main_item_id_key: "catenaXId",
                relationships_key: "childItems",
                relationship_item_id_key: "catenaXId",
                id_prefix: ID_PREFIX,
            },
            SemanticModel::BomAsPlanned300 => ModelTemplate {
                name: self.as_str(),
                main_item: json!({
                    "catenaXId": "",
                    "childItems": []
                }),
                relationship_item: json!({
                    "validityPeriod": {
                        "validFrom": "2023-03-21T08:17:29.187+01:00",
                        "validTo": "2024-07-01T16:10:00.000+01:00"
                    },
                    "catenaXId": "",
                    "quantity": {
                        "unit": "unit:piece",
                        "value": 1
                    },
                    "businessPartner": "BPNL00000000TEST",
                    "createdOn": "2022-02-03T14:48:54.709Z",
                    "lastModifiedOn": "2022-02-03T14:48:54.709Z"
                }),
                main_item_id_key: "catenaXId",
                relationships_key: "childItems",
                relationship_item_id_key: "catenaXId",
                id_prefix: ID_PREFIX,
            },
            SemanticModel::BomAsSpecified200 => ModelTemplate {
                name: self.as_str(),
                main_item: json!({
                    "assetId": "",
                    "manufacturerId": "BPNL00000000TEST",
                    "childItems": []
                }),
                relationship_item: json!({
                    "item": [{
                        "itemClassification": [{
                            "value": "Door Key",
                            "key": "BPNL00000003CSGV:PartFamily"
                        }],
                        "itemQuantity": {
                            "quantityNumber": 20,
                            "measurementUnit": "unit:piece"
                        },
                        "ownerItemId": "urn:uuid:c4ae951f-b68d-462b-a58c-c029cc926630",
                        "itemVersion": "05",
                        "itemDescription": "The steering wheel is nice and round",
                        "createdOn": "2022-02-03T14:48:54.709Z",
                        "itemPositioning": "right",
                        "lastModifiedOn": "2022-02-03T14:48:54.709Z"
                    }],
                    "childAssetId": "",
                    "childItemCategory": "e.g. vehicle, winter wheels, bicycle rack"
                }),
                main_item_id_key: "assetId",
                relationships_key: "childItems",
                relationship_item_id_key: "childAssetId",
                id_prefix: ID_PREFIX,
            },
            SemanticModel::UsageAsBuilt300 => ModelTemplate {
                name: self.as_str(),
                main_item: json!({
                    "catenaXId": "",
                    "parentItems": [],
                    "customers": ["BPNL00000000TEST"]
                }),
                relationship_item: json!({
                    "catenaXId": "",
                    "isOnlyPotentialParent": false,
                    "quantity": {
                        "unit": "unit:piece",
                        "value": 20
                    },
                    "businessPartner": "BPNL00000000TEST",
                    "createdOn": "2022-02-03T14:48:54.709Z",
                    "lastModifiedOn": "2022-02-03T14:48:54.709Z"
                }),
                main_item_id_key: "catenaXId",
                relationships_key: "parentItems",
                relationship_item_id_key: "catenaXId",
                id_prefix: ID_PREFIX,
            },
            SemanticModel::UsageAsPlanned110 => ModelTemplate {
                name: self.as_str(),
                main_item: json!({
                    "parentParts": [],
                    "catenaXId": ""
                }),
                relationship_item: json!({
                    "validityPeriod": {
                        "validFrom": "2023-03-21T08:47:14.438+01:00",
                        "validTo": "2024-08-02T09:00:00.000+01:00"
                    },
                    "parentCatenaXId": "",
                    "quantity": {
                        "quantityNumber": 2.5,
                        "measurementUnit": "unit:litre"
                    },
                    "createdOn": "2022-02-03T14:48:54.709Z",
                    "lastModifiedOn": "2022-02-03T14:48:54.709Z"
                }),
                main_item_id_key: "catenaXId",
                relationships_key: "parentParts",
                relationship_item_id_key: "parentCatenaXId",
                id_prefix: ID_PREFIX,
            },
        }
    }
}

impl FromStr for SemanticModel {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        SemanticModel::ALL
            .into_iter()
            .find(|model| model.as_str() == name)
            .ok_or_else(|| Error::UnknownModel(name.to_string()))
    }
}

impl fmt::Display for SemanticModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Skeleton of the batch record paired with every main item, independent of the chosen model
pub(crate) fn batch_skeleton() -> Value {
    json!({
        "localIdentifiers": [
            {
                "value": "BPNL00000000TEST",
                "key": "manufacturerId"
            },
            {
                "value": "BID12345678",
                "key": "batchId"
            }
        ],
        "manufacturingInformation": {
            "date": "2022-02-04T14:48:54Z",
            "country": "HUR"
        },
        "catenaXId": "",
        "partTypeInformation": {
            "manufacturerPartId": "123-0.740-3434-A",
            "classification": "product",
            "nameAtManufacturer": "Unspecified component"
        }
    })
}

/// Key of the identifier inside a batch record
pub(crate) const BATCH_ID_KEY: &str = "catenaXId";
