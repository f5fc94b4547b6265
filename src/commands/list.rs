use crate::api::ApiConfig;
use crate::libs::view::View;
use anyhow::Result;

pub async fn cmd(api: &ApiConfig) -> Result<()> {
    let mut controller = super::controller(api);
    controller.refresh().await;
    View::tasks(controller.tasks(), controller.is_loading());

    Ok(())
}
