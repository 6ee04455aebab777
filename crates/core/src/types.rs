/// Document identifiers are opaque strings assigned by the document store.
pub type DocumentId = String;
