use anyhow::Result;
use authfetch_lib::authfetch_api::Method;
use authfetch_lib::{validation, Client, RequestDescriptor};
use clap::Args;

use crate::output::{print_body, print_json, print_table, OutputFormat, ResponseEnvelope};

#[derive(Args)]
pub struct ReadArgs {
    /// Request URL, absolute or relative to the base URL
    pub url: String,

    /// Extra request header as 'Name: value' (repeatable)
    #[arg(short = 'H', long = "header")]
    pub headers: Vec<String>,
}

#[derive(Args)]
pub struct WriteArgs {
    #[command(flatten)]
    pub target: ReadArgs,

    /// JSON request body
    #[arg(long)]
    pub data: Option<String>,
}

pub async fn read(
    args: &ReadArgs,
    method: Method,
    client: &Client,
    format: &OutputFormat,
) -> Result<()> {
    let request = with_headers(RequestDescriptor::new(method, args.url.as_str()), args)?;
    send(request, client, format).await
}

pub async fn write(
    args: &WriteArgs,
    method: Method,
    client: &Client,
    format: &OutputFormat,
) -> Result<()> {
    let mut request = RequestDescriptor::new(method, args.target.url.as_str());
    if let Some(data) = &args.data {
        let body = validation::parse_json_body(data)?;
        request = request.with_json(&body)?;
    }
    // User headers go last so an explicit Content-Type wins.
    let request = with_headers(request, &args.target)?;
    send(request, client, format).await
}

fn with_headers(mut request: RequestDescriptor, args: &ReadArgs) -> Result<RequestDescriptor> {
    let headers = validation::parse_headers(&args.headers)?;
    request.headers.extend(headers);
    Ok(request)
}

async fn send(request: RequestDescriptor, client: &Client, format: &OutputFormat) -> Result<()> {
    let response = client.send(request).await?;
    match format {
        OutputFormat::Body => print_body(&response),
        OutputFormat::Json => print_json(&ResponseEnvelope::from(&response)),
        OutputFormat::Table => print_table(&response),
    }
    Ok(())
}
