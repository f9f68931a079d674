//! Two-pass document graph construction.
//!
//! Pass 1 materializes every resource in `included ++ data` and fills the
//! schema and object registries. Pass 2 resolves relationships against the
//! now-complete registry, which is what makes forward references and
//! reference cycles work without recursion.

use log::{debug, trace};
use serde_json::{Map, Value};

use sideload_foundation::{FieldValue, LinkageId, ResourceId, Result};

use crate::document::Document;
use crate::linkage::{GraphKey, Linkage, LinkageStore};
use crate::registry::ObjectRegistry;
use crate::schema::SchemaRegistry;
use crate::tables::SideTables;
use crate::validate;

/// Orchestrates one build. All state is scoped to the call; nothing is
/// shared between documents.
pub(crate) struct GraphBuilder {
    schemas: SchemaRegistry,
    objects: ObjectRegistry,
    linkages: LinkageStore,
    tables: SideTables,
}

impl GraphBuilder {
    pub(crate) fn build(root: &Value) -> Result<Document> {
        validate::validate_root(root)?;

        let mut builder = Self {
            schemas: SchemaRegistry::new(),
            objects: ObjectRegistry::new(),
            linkages: LinkageStore::new(),
            tables: SideTables::new(),
        };

        let root_obj = root.as_object();
        let data = root_obj.and_then(|m| m.get("data"));
        let included: &[Value] = root_obj
            .and_then(|m| m.get("included"))
            .and_then(Value::as_array)
            .map_or(&[], Vec::as_slice);

        // Processing order is included first, then primary. It decides both
        // iteration order and which duplicate occurrence wins a field.
        let mut order: Vec<&Map<String, Value>> =
            included.iter().filter_map(Value::as_object).collect();
        match data {
            Some(Value::Array(items)) => order.extend(items.iter().filter_map(Value::as_object)),
            Some(Value::Object(item)) => order.push(item),
            _ => {}
        }

        builder.materialize(&order);
        builder.resolve_all(&order)?;

        // The top-level `data` value mirrors the input shape and carries the
        // root links and meta under its identity key.
        let data_id = builder.resolve(data);
        let data_key = builder.linkages.key(GraphKey::Linkage(data_id));
        builder
            .tables
            .assign_links(data_key, root_obj.and_then(|m| m.get("links")).cloned());
        builder
            .tables
            .assign_meta(data_key, root_obj.and_then(|m| m.get("meta")).cloned());

        let errors = root_obj
            .and_then(|m| m.get("errors"))
            .and_then(Value::as_array)
            .cloned();

        debug!(
            "built document graph: {} resources across {} types, {} linkages",
            builder.objects.len(),
            builder.schemas.len(),
            builder.linkages.len()
        );

        Ok(Document::from_parts(
            builder.schemas,
            builder.objects,
            builder.linkages,
            builder.tables,
            data_id,
            errors,
        ))
    }

    /// Pass 1: create every resource and copy its attributes.
    fn materialize(&mut self, order: &[&Map<String, Value>]) {
        for hash in order {
            let kind = member_str(hash, "type");
            let id = member_str(hash, "id");

            let attrs = hash.get("attributes").and_then(Value::as_object);
            let rels = hash.get("relationships").and_then(Value::as_object);
            let members = ["id", "type"]
                .into_iter()
                .chain(attrs.into_iter().flat_map(Map::keys).map(String::as_str))
                .chain(rels.into_iter().flat_map(Map::keys).map(String::as_str));
            self.schemas.register_fields(kind, members);

            let rid = self.objects.get_or_create(kind, id);

            if let Some(attrs) = attrs {
                for (name, value) in attrs {
                    let ident = self.schemas.ident(name);
                    let field = FieldValue::Value(value.clone());
                    self.tables.record_original(rid, name, field.clone());
                    self.objects.resource_mut(rid).set(ident, field);
                }
            }

            if let Some(links) = hash.get("links") {
                self.tables
                    .assign_links(GraphKey::Resource(rid), Some(links.clone()));
                // The links member doubles as a plain field on the resource.
                self.schemas.register_fields(kind, ["links"]);
                let ident = self.schemas.ident("links");
                self.objects
                    .resource_mut(rid)
                    .set(ident, FieldValue::Value(links.clone()));
            }
        }
    }

    /// Pass 2: resolve relationships against the completed registry.
    fn resolve_all(&mut self, order: &[&Map<String, Value>]) -> Result<()> {
        for hash in order {
            let kind = member_str(hash, "type");
            let id = member_str(hash, "id");
            let Some(rid) = self.objects.get(kind, id) else {
                continue;
            };
            let Some(rels) = hash.get("relationships").and_then(Value::as_object) else {
                continue;
            };

            for (name, relationship) in rels {
                validate::validate_relationship(name, relationship)?;

                let rel_obj = relationship.as_object();
                let lid = self.resolve(rel_obj.and_then(|m| m.get("data")));
                let ident = self.schemas.ident(name);
                let field = FieldValue::Linkage(lid);
                self.tables.record_original(rid, name, field.clone());
                self.objects.resource_mut(rid).set(ident, field);

                let key = self.linkages.key(GraphKey::Linkage(lid));
                self.tables
                    .assign_rel_links(key, rel_obj.and_then(|m| m.get("links")).cloned());
                self.tables
                    .assign_meta(key, rel_obj.and_then(|m| m.get("meta")).cloned());
            }
        }
        Ok(())
    }

    /// Resolves a `data` member (a relationship's, or the document's own)
    /// into a freshly allocated linkage.
    ///
    /// A missing member and an explicit `null` both resolve to
    /// [`Linkage::Absent`].
    fn resolve(&mut self, data: Option<&Value>) -> LinkageId {
        let linkage = match data {
            Some(Value::Array(items)) => Linkage::Many(
                items
                    .iter()
                    .filter_map(Value::as_object)
                    .map(|reference| self.reference(reference))
                    .collect(),
            ),
            Some(Value::Object(reference)) => Linkage::One(self.reference(reference)),
            _ => Linkage::Absent,
        };
        self.linkages.alloc(linkage)
    }

    /// Looks up a referenced resource, creating a stub when the target never
    /// appeared in `included` or `data`.
    fn reference(&mut self, reference: &Map<String, Value>) -> ResourceId {
        let kind = member_str(reference, "type");
        let id = member_str(reference, "id");
        if self.objects.get(kind, id).is_none() {
            trace!("creating stub resource for {kind}/{id}");
        }
        // Stub targets still contribute their implicit fields to the schema.
        self.schemas.register_fields(kind, ["id", "type"]);
        self.objects.get_or_create(kind, id)
    }
}

fn member_str<'a>(hash: &'a Map<String, Value>, name: &str) -> &'a str {
    hash.get(name).and_then(Value::as_str).unwrap_or_default()
}
