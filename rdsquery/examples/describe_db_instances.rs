use anyhow::Result;
use rdsquery::aws_rds::config_from_env;
use rdsquery::{default_context, eval, DescribeDbInstancesInput};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    // Reads AWS_RDS_ENDPOINT, AWS_ACCESS_KEY_ID, AWS_SECRET_ACCESS_KEY
    // and AWS_RDS_DB_INSTANCE_IDENTIFIER.
    let config = config_from_env();
    let input = DescribeDbInstancesInput::try_from(&config)?;

    let output = eval(&default_context(), &input).await;
    let resp = output.result?;

    println!("Request id: {}", resp.request_id);
    for instance in resp.db_instances {
        println!(
            "{} ({} {}) is {} at {}:{}",
            instance.db_instance_identifier,
            instance.engine,
            instance.engine_version,
            instance.db_instance_status,
            instance.address,
            instance.port
        );
    }

    Ok(())
}
