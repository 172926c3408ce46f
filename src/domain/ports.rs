use crate::domain::model::{LeagueReport, Record};
use crate::domain::services::fields::FieldMapping;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    /// http(s) URL or local path of the JSON match list.
    fn source(&self) -> &str;
    fn output_path(&self) -> &str;
    fn field_mapping(&self) -> FieldMapping;
    fn team_filter(&self) -> Option<&str>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<Record>>;
    async fn transform(&self, data: Vec<Record>) -> Result<LeagueReport>;
    async fn load(&self, report: LeagueReport) -> Result<String>;
}
