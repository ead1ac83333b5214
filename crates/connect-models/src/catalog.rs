//! # Catalog Models
//!
//! Catalog objects, queries over them and the catalog endpoints' payloads.
//!
//! `CatalogObject` is recursive: an item's `variations` are themselves
//! catalog objects. The recursion goes through `lazy(CatalogObject::schema)`
//! inside `CatalogItem`, and the `Vec` supplies the heap indirection.

use std::collections::BTreeMap;

use connect_schema::{array, boolean, dict, integer, lazy, optional, string, Model};

use crate::common::ApiError;

/// A mapping between a temporary client-supplied ID and a permanent
/// server-generated ID.
///
/// When upserting catalog objects a client may give a new object a
/// temporary `#`-prefixed ID so other objects in the same request can refer
/// to it. The response maps each temporary ID to the permanent one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogIdMapping {
    /// The client-supplied temporary `#`-prefixed ID.
    pub client_object_id: Option<String>,
    /// The permanent ID assigned by the server.
    pub object_id: Option<String>,
}

impl_model!(CatalogIdMapping {
    client_object_id: "client_object_id" => optional(string()),
    object_id: "object_id" => optional(string()),
});

/// A catalog entry of any type. The populated `*_data` field matches
/// `object_type`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogObject {
    /// `ITEM`, `ITEM_VARIATION`, `CATEGORY`, `DISCOUNT`, `TAX`, ... Wire key `type`.
    pub object_type: String,
    pub id: String,
    pub updated_at: Option<String>,
    pub version: Option<i64>,
    pub is_deleted: Option<bool>,
    pub custom_attribute_values: Option<BTreeMap<String, CatalogCustomAttributeValue>>,
    pub present_at_all_locations: Option<bool>,
    pub present_at_location_ids: Option<Vec<String>>,
    pub item_data: Option<CatalogItem>,
    pub category_data: Option<CatalogCategory>,
}

impl_model!(CatalogObject {
    object_type: "type" => string(),
    id: "id" => string(),
    updated_at: "updated_at" => optional(string()),
    version: "version" => optional(integer()),
    is_deleted: "is_deleted" => optional(boolean()),
    custom_attribute_values: "custom_attribute_values" =>
        optional(dict(lazy(CatalogCustomAttributeValue::schema))),
    present_at_all_locations: "present_at_all_locations" => optional(boolean()),
    present_at_location_ids: "present_at_location_ids" => optional(array(string())),
    item_data: "item_data" => optional(lazy(CatalogItem::schema)),
    category_data: "category_data" => optional(lazy(CatalogCategory::schema)),
});

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogItem {
    pub name: Option<String>,
    pub description: Option<String>,
    pub abbreviation: Option<String>,
    pub category_id: Option<String>,
    /// Variations of this item, each an `ITEM_VARIATION` catalog object.
    pub variations: Option<Vec<CatalogObject>>,
}

impl_model!(CatalogItem {
    name: "name" => optional(string()),
    description: "description" => optional(string()),
    abbreviation: "abbreviation" => optional(string()),
    category_id: "category_id" => optional(string()),
    variations: "variations" => optional(array(lazy(CatalogObject::schema))),
});

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogCategory {
    pub name: Option<String>,
}

impl_model!(CatalogCategory {
    name: "name" => optional(string()),
});

/// A value of a custom attribute attached to a catalog object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogCustomAttributeValue {
    pub name: Option<String>,
    pub string_value: Option<String>,
    pub custom_attribute_definition_id: Option<String>,
    /// Wire key `type`.
    pub value_type: Option<String>,
    /// Decimal number encoded as a string.
    pub number_value: Option<String>,
    pub boolean_value: Option<bool>,
    pub selection_uid_values: Option<Vec<String>>,
    pub key: Option<String>,
}

impl_model!(CatalogCustomAttributeValue {
    name: "name" => optional(string()),
    string_value: "string_value" => optional(string()),
    custom_attribute_definition_id: "custom_attribute_definition_id" => optional(string()),
    value_type: "type" => optional(string()),
    number_value: "number_value" => optional(string()),
    boolean_value: "boolean_value" => optional(boolean()),
    selection_uid_values: "selection_uid_values" => optional(array(string())),
    key: "key" => optional(string()),
});

/// A query composed of one or more filters. Only one query is allowed per
/// search call; attributes used in filters must be searchable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogQuery {
    pub exact_query: Option<CatalogQueryExact>,
    pub prefix_query: Option<CatalogQueryPrefix>,
    pub range_query: Option<CatalogQueryRange>,
    pub text_query: Option<CatalogQueryText>,
}

impl_model!(CatalogQuery {
    exact_query: "exact_query" => optional(lazy(CatalogQueryExact::schema)),
    prefix_query: "prefix_query" => optional(lazy(CatalogQueryPrefix::schema)),
    range_query: "range_query" => optional(lazy(CatalogQueryRange::schema)),
    text_query: "text_query" => optional(lazy(CatalogQueryText::schema)),
});

/// Matches objects whose attribute equals a value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogQueryExact {
    pub attribute_name: String,
    pub attribute_value: String,
}

impl_model!(CatalogQueryExact {
    attribute_name: "attribute_name" => string(),
    attribute_value: "attribute_value" => string(),
});

/// Matches objects whose attribute starts with a prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogQueryPrefix {
    pub attribute_name: String,
    pub attribute_prefix: String,
}

impl_model!(CatalogQueryPrefix {
    attribute_name: "attribute_name" => string(),
    attribute_prefix: "attribute_prefix" => string(),
});

/// Matches objects whose integer attribute lies within an inclusive range.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogQueryRange {
    pub attribute_name: String,
    pub attribute_min_value: Option<i64>,
    pub attribute_max_value: Option<i64>,
}

impl_model!(CatalogQueryRange {
    attribute_name: "attribute_name" => string(),
    attribute_min_value: "attribute_min_value" => optional(integer()),
    attribute_max_value: "attribute_max_value" => optional(integer()),
});

/// Matches objects whose searchable text contains every keyword.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogQueryText {
    pub keywords: Vec<String>,
}

impl_model!(CatalogQueryText {
    keywords: "keywords" => array(string()),
});

/// Request body of the SearchCatalogObjects endpoint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchCatalogObjectsRequest {
    /// Cursor from the previous response; unset for the first page.
    pub cursor: Option<String>,
    /// Object types to return, e.g. `ITEM`, `CATEGORY`, `TAX`.
    pub object_types: Option<Vec<String>>,
    pub include_deleted_objects: Option<bool>,
    /// Also return objects related to the matches (categories, taxes, ...).
    pub include_related_objects: Option<bool>,
    /// Only objects modified after this RFC 3339 timestamp (exclusive).
    pub begin_time: Option<String>,
    pub query: Option<CatalogQuery>,
    /// Advisory page size. The server ignores values outside `1..=1000`;
    /// no range check happens here. Integral floats (`10.0`) decode as
    /// integers; fractional values fail validation.
    pub limit: Option<i64>,
}

impl_model!(SearchCatalogObjectsRequest {
    cursor: "cursor" => optional(string()),
    object_types: "object_types" => optional(array(string())),
    include_deleted_objects: "include_deleted_objects" => optional(boolean()),
    include_related_objects: "include_related_objects" => optional(boolean()),
    begin_time: "begin_time" => optional(string()),
    query: "query" => optional(lazy(CatalogQuery::schema)),
    limit: "limit" => optional(integer()),
});

/// Response body of the ListCatalog endpoint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListCatalogResponse {
    pub errors: Option<Vec<ApiError>>,
    pub cursor: Option<String>,
    pub objects: Option<Vec<CatalogObject>>,
}

impl_model!(ListCatalogResponse {
    errors: "errors" => optional(array(lazy(ApiError::schema))),
    cursor: "cursor" => optional(string()),
    objects: "objects" => optional(array(lazy(CatalogObject::schema))),
});
