//! AI analysis, comparison and chat types.
//!
//! All scoring and text generation happens on the backend; these types
//! only mirror the wire shapes.

use serde::{Deserialize, Serialize};

/// AI price/value analysis of a single listing.
#[derive(Debug, Clone, Deserialize)]
pub struct AiAnalysis {
    /// Price score from 0 to 100.
    #[serde(rename = "fiyat_skoru")]
    pub price_score: f64,
    /// Narrative price assessment.
    #[serde(rename = "fiyat_degerlendirme")]
    pub price_assessment: String,
    /// Unit price of the listing.
    #[serde(rename = "metrekare_birim_fiyat", default)]
    pub unit_price: Option<f64>,
    /// Average unit price of the surrounding area.
    #[serde(rename = "bolge_ortalama_birim_fiyat", default)]
    pub area_average_unit_price: Option<f64>,
    /// Percentage difference from the area average.
    #[serde(rename = "fiyat_farki_yuzde", default)]
    pub price_difference_percent: Option<f64>,
    /// Highlighted advantages.
    #[serde(rename = "avantajlar", default)]
    pub advantages: Vec<String>,
    /// Highlighted disadvantages.
    #[serde(rename = "dezavantajlar", default)]
    pub disadvantages: Vec<String>,
    /// Recommendation text.
    #[serde(rename = "tavsiye")]
    pub recommendation: String,
    /// Overall assessment text.
    #[serde(rename = "genel_degerlendirme")]
    pub overall_assessment: String,
}

/// A per-category winner in a comparison.
#[derive(Debug, Clone, Deserialize)]
pub struct ComparisonPick {
    /// Identifier of the winning listing.
    #[serde(rename = "ilan_id")]
    pub listing_id: u64,
    /// Title of the winning listing.
    #[serde(rename = "baslik")]
    pub title: String,
    /// Why the listing won the category.
    #[serde(rename = "sebep")]
    pub reason: String,
}

/// A scored row of the comparison table.
#[derive(Debug, Clone, Deserialize)]
pub struct ComparisonRow {
    /// Identifier of the compared listing.
    #[serde(rename = "ilan_id")]
    pub listing_id: u64,
    /// Title of the compared listing.
    #[serde(rename = "baslik")]
    pub title: String,
    /// Price score from 0 to 100.
    #[serde(rename = "fiyat_skoru")]
    pub price_score: f64,
    /// Location score from 0 to 100.
    #[serde(rename = "konum_skoru")]
    pub location_score: f64,
    /// Feature score from 0 to 100.
    #[serde(rename = "ozellik_skoru")]
    pub feature_score: f64,
    /// Overall score from 0 to 100.
    #[serde(rename = "genel_skor")]
    pub overall_score: f64,
    /// The listing's standout feature.
    #[serde(rename = "one_cikan_ozellik")]
    pub highlight: String,
    /// What to watch out for.
    #[serde(rename = "dikkat_edilecek")]
    pub caveat: String,
}

/// AI comparison of several listings.
#[derive(Debug, Clone, Deserialize)]
pub struct AiComparison {
    /// Narrative summary of the comparison.
    #[serde(rename = "ozet")]
    pub summary: String,
    /// Best-priced listing, when determined.
    #[serde(rename = "en_uygun_fiyat", default)]
    pub best_price: Option<ComparisonPick>,
    /// Best-located listing, when determined.
    #[serde(rename = "en_iyi_konum", default)]
    pub best_location: Option<ComparisonPick>,
    /// Best-value listing, when determined.
    #[serde(rename = "en_iyi_deger", default)]
    pub best_value: Option<ComparisonPick>,
    /// Scored comparison table.
    #[serde(rename = "karsilastirma_tablosu", default)]
    pub table: Option<Vec<ComparisonRow>>,
    /// Recommendation text.
    #[serde(rename = "tavsiye")]
    pub recommendation: String,
}

/// Response body for `POST /ai/analyze`.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisResponse {
    /// Whether the analysis succeeded.
    #[serde(rename = "basarili")]
    pub success: bool,
    /// The analysis payload.
    #[serde(rename = "analiz")]
    pub analysis: AiAnalysis,
    /// Whether the result came from the backend's cache.
    #[serde(default)]
    pub cached: bool,
}

/// Response body for `POST /ai/compare`.
#[derive(Debug, Clone, Deserialize)]
pub struct ComparisonResponse {
    /// Whether the comparison succeeded.
    #[serde(rename = "basarili")]
    pub success: bool,
    /// The comparison payload.
    #[serde(rename = "karsilastirma")]
    pub comparison: AiComparison,
}

/// The conversational context a chat message belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatContext {
    /// Chat about a specific listing.
    Property,
    /// Chat about a search.
    Search,
    /// Chat about a comparison.
    Comparison,
    /// General chat.
    General,
}

/// Request body for `POST /ai/chat`.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    /// The user's message.
    #[serde(rename = "mesaj")]
    pub message: String,
    /// Session to continue; a new session is opened when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    /// Context kind of the conversation.
    #[serde(rename = "baglam_tipi", skip_serializing_if = "Option::is_none")]
    pub context: Option<ChatContext>,
    /// Context payload, e.g. the listing under discussion.
    #[serde(rename = "baglam_verisi", skip_serializing_if = "Option::is_none")]
    pub context_data: Option<serde_json::Value>,
}

/// Response body for `POST /ai/chat`.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatReply {
    /// Whether the chat call succeeded.
    #[serde(rename = "basarili")]
    pub success: bool,
    /// Session the reply belongs to.
    pub session_id: String,
    /// The assistant's reply.
    #[serde(rename = "yanit")]
    pub reply: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_analysis_wire_format() {
        let json = r#"{
            "fiyat_skoru": 82.5,
            "fiyat_degerlendirme": "Bölge ortalamasının altında",
            "avantajlar": ["Uygun fiyat"],
            "dezavantajlar": [],
            "tavsiye": "Değerlendirilebilir",
            "genel_degerlendirme": "İyi fırsat"
        }"#;
        let analysis: AiAnalysis = serde_json::from_str(json).unwrap();
        assert_eq!(analysis.advantages, vec!["Uygun fiyat"]);
        assert!(analysis.unit_price.is_none());
    }

    #[test]
    fn test_chat_request_context_encoding() {
        let request = ChatRequest {
            message: "Bu ilan pahalı mı?".to_string(),
            session_id: None,
            context: Some(ChatContext::Property),
            context_data: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["baglam_tipi"], "property");
        assert!(json.get("session_id").is_none());
    }
}
