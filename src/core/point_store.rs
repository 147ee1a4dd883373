//! Geordnete, veränderliche Anker-Sequenz (einzige Quelle der Wahrheit).
//!
//! Der Store leitet nichts ab: nach jeder Mutation ist ein vorhandener Pfad
//! veraltet, der Neuaufbau ist Sache des Controllers.

use glam::Vec2;
use thiserror::Error;

/// Vertragsverletzungen beim Zugriff auf den `PointStore`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PointStoreError {
    /// Index liegt nicht in `[0, len - 1]`
    #[error("Anker-Index {index} außerhalb des Bereichs (Anzahl: {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Besitzt die Anker-Sequenz. Identität eines Ankers ist seine Position in der Sequenz.
#[derive(Debug, Clone, Default)]
pub struct PointStore {
    anchors: Vec<Vec2>,
    revision: u64,
}

impl PointStore {
    /// Erstellt einen leeren Store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Erstellt einen Store mit vorgegebenen Ankern.
    pub fn from_points(points: impl IntoIterator<Item = Vec2>) -> Self {
        Self {
            anchors: points.into_iter().collect(),
            revision: 0,
        }
    }

    /// Hängt einen Anker an und gibt dessen Index (`len - 1`) zurück.
    pub fn append(&mut self, point: Vec2) -> usize {
        self.anchors.push(point);
        self.bump();
        self.anchors.len() - 1
    }

    /// Ersetzt den Anker an `index`.
    pub fn replace(&mut self, index: usize, point: Vec2) -> Result<(), PointStoreError> {
        let len = self.anchors.len();
        let slot = self
            .anchors
            .get_mut(index)
            .ok_or(PointStoreError::IndexOutOfRange { index, len })?;
        *slot = point;
        self.bump();
        Ok(())
    }

    /// Entfernt den Anker an `index`; alle folgenden Indizes rücken um eins nach vorn.
    pub fn delete(&mut self, index: usize) -> Result<Vec2, PointStoreError> {
        let len = self.anchors.len();
        if index >= len {
            return Err(PointStoreError::IndexOutOfRange { index, len });
        }
        let removed = self.anchors.remove(index);
        self.bump();
        Ok(removed)
    }

    /// Entfernt alle Anker.
    pub fn clear(&mut self) {
        self.anchors.clear();
        self.bump();
    }

    /// Ersetzt die komplette Sequenz (z.B. beim Laden eines Presets).
    pub fn replace_all(&mut self, points: impl IntoIterator<Item = Vec2>) {
        self.anchors.clear();
        self.anchors.extend(points);
        self.bump();
    }

    /// Read-only Sicht auf alle Anker in Durchlaufreihenfolge.
    pub fn get_all(&self) -> &[Vec2] {
        &self.anchors
    }

    /// Anker an `index`, falls vorhanden.
    pub fn get(&self, index: usize) -> Option<Vec2> {
        self.anchors.get(index).copied()
    }

    /// Anzahl der Anker.
    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    /// Gibt `true` zurück, wenn keine Anker vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    /// Zähler, der bei jeder Mutation steigt.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
