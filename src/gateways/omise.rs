use crate::domain::payment::{GatewayCharge, PaymentRequest};
use crate::error::PaymentError;
use crate::gateways::PaymentGateway;
use serde::Deserialize;
use serde_json::json;

pub struct OmiseGateway {
    pub base_url: String,
    pub public_key: String,
    pub secret_key: String,
    pub timeout_ms: u64,
    pub client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct SourceObject {
    id: String,
    #[serde(rename = "type")]
    source_type: String,
    amount: i64,
    currency: String,
}

#[derive(Debug, Deserialize)]
struct ChargeObject {
    id: String,
    status: String,
    amount: i64,
    currency: String,
    authorize_uri: Option<String>,
    return_uri: Option<String>,
    source: Option<ChargeSource>,
}

#[derive(Debug, Deserialize)]
struct ChargeSource {
    #[serde(rename = "type")]
    source_type: String,
}

impl ChargeObject {
    fn into_domain(self) -> Result<GatewayCharge, PaymentError> {
        Ok(GatewayCharge {
            id: self.id,
            status: self.status.parse()?,
            amount: self.amount,
            currency: self.currency,
            authorize_uri: self.authorize_uri.unwrap_or_default(),
            source_type: self.source.map(|s| s.source_type).unwrap_or_default(),
            return_uri: self.return_uri.unwrap_or_default(),
        })
    }
}

impl OmiseGateway {
    async fn create_source(&self, req: &PaymentRequest) -> Result<SourceObject, PaymentError> {
        let body = json!({
            "type": req.source_type,
            "amount": req.amount,
            "currency": req.currency,
        });

        let resp = self
            .client
            .post(format!("{}/sources", self.base_url))
            .basic_auth(&self.public_key, None::<&str>)
            .json(&body)
            .timeout(std::time::Duration::from_millis(self.timeout_ms))
            .send()
            .await
            .map_err(PaymentError::gateway)?;

        read_json(resp).await
    }

    async fn create_charge(&self, source: &SourceObject, return_uri: &str) -> Result<ChargeObject, PaymentError> {
        let body = json!({
            "source": source.id,
            "amount": source.amount,
            "currency": source.currency,
            "return_uri": return_uri,
        });

        let resp = self
            .client
            .post(format!("{}/charges", self.base_url))
            .basic_auth(&self.secret_key, None::<&str>)
            .json(&body)
            .timeout(std::time::Duration::from_millis(self.timeout_ms))
            .send()
            .await
            .map_err(PaymentError::gateway)?;

        read_json(resp).await
    }
}

#[async_trait::async_trait]
impl PaymentGateway for OmiseGateway {
    async fn charge(&self, req: &PaymentRequest) -> Result<GatewayCharge, PaymentError> {
        let source = self.create_source(req).await?;
        let charge = self.create_charge(&source, &req.return_uri).await?;
        charge.into_domain()
    }

    async fn get_charge(&self, charge_id: &str) -> Result<GatewayCharge, PaymentError> {
        let resp = self
            .client
            .get(format!("{}/charges/{}", self.base_url, charge_id))
            .basic_auth(&self.secret_key, None::<&str>)
            .timeout(std::time::Duration::from_millis(self.timeout_ms))
            .send()
            .await
            .map_err(PaymentError::gateway)?;

        let charge: ChargeObject = read_json(resp).await?;
        charge.into_domain()
    }
}

async fn read_json<T: serde::de::DeserializeOwned>(resp: reqwest::Response) -> Result<T, PaymentError> {
    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(PaymentError::gateway(anyhow::anyhow!(
            "omise responded {}: {}",
            status.as_u16(),
            body.chars().take(200).collect::<String>()
        )));
    }

    resp.json::<T>().await.map_err(PaymentError::gateway)
}
