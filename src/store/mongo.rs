//! MongoDB-backed student repository
//!
//! Translates the repository operations into document-store queries against
//! one collection: id-based lookup, full-scan listing, and direct field-set
//! replacement for updates. Driver errors pass through verbatim; there are
//! no retries and no transactions.

use crate::Result;
use crate::config::DatabaseSettings;
use crate::store::StudentRepository;
use crate::types::{CreateStudentRequest, Student, UpdateStudentRequest};
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    Client, Collection,
    bson::{Document, doc, oid::ObjectId},
    options::ReturnDocument,
};

/// Student repository backed by a MongoDB collection
#[derive(Clone)]
pub struct MongoStudentRepository {
    collection: Collection<Student>,
}

impl MongoStudentRepository {
    /// Connect to the document store described by `settings`
    ///
    /// The connection is verified once with a `ping`; a failed ping is logged
    /// as a warning and the repository is still returned, so the server can
    /// start listening while the database is unreachable. Individual requests
    /// fail until it comes back.
    pub async fn connect(settings: &DatabaseSettings) -> Result<Self> {
        let client = Client::with_uri_str(&settings.uri).await?;
        let database = client.database(&settings.database);

        match database.run_command(doc! { "ping": 1 }).await {
            Ok(_) => tracing::info!(
                "Connected to MongoDB database '{}' at {}",
                settings.database,
                settings.uri
            ),
            Err(e) => tracing::warn!(
                "Could not reach MongoDB at startup: {}. Continuing; requests will fail until the database is reachable.",
                e
            ),
        }

        Ok(Self {
            collection: database.collection(&settings.collection),
        })
    }

    /// Build a repository from an existing collection handle
    pub fn from_collection(collection: Collection<Student>) -> Self {
        Self { collection }
    }

    /// Parse a path id into a document id
    ///
    /// An unparseable id matches no document, so lookups with one short-cut
    /// to not-found instead of erroring.
    fn parse_id(id: &str) -> Option<ObjectId> {
        ObjectId::parse_str(id).ok()
    }
}

#[async_trait]
impl StudentRepository for MongoStudentRepository {
    async fn list(&self) -> Result<Vec<Student>> {
        let cursor = self.collection.find(doc! {}).await?;
        let students = cursor.try_collect().await?;
        Ok(students)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Student>> {
        let Some(oid) = Self::parse_id(id) else {
            return Ok(None);
        };

        let student = self.collection.find_one(doc! { "_id": oid }).await?;
        Ok(student)
    }

    async fn insert(&self, request: &CreateStudentRequest) -> Result<Student> {
        let student = Student {
            id: Some(ObjectId::new()),
            name: request.name.clone(),
            age: request.age,
            course: request.course.clone(),
        };

        self.collection.insert_one(&student).await?;
        Ok(student)
    }

    async fn update(&self, id: &str, request: &UpdateStudentRequest) -> Result<Option<Student>> {
        let Some(oid) = Self::parse_id(id) else {
            return Ok(None);
        };

        // An empty payload carries no $set; re-read the record instead.
        if request.is_empty() {
            return self.find_by_id(id).await;
        }

        let mut set = Document::new();
        if let Some(name) = &request.name {
            set.insert("name", name);
        }
        if let Some(age) = request.age {
            set.insert("age", age);
        }
        if let Some(course) = &request.course {
            set.insert("course", course);
        }

        let updated = self
            .collection
            .find_one_and_update(doc! { "_id": oid }, doc! { "$set": set })
            .return_document(ReturnDocument::After)
            .await?;

        Ok(updated)
    }

    async fn delete(&self, id: &str) -> Result<Option<Student>> {
        let Some(oid) = Self::parse_id(id) else {
            return Ok(None);
        };

        let deleted = self
            .collection
            .find_one_and_delete(doc! { "_id": oid })
            .await?;

        Ok(deleted)
    }
}
