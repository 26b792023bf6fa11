//! テスト用のgvizモックサーバー
//!
//! gidごとに (ステータス, CSV本文) を返す。未登録のgidは404。

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

pub const CATEGORIES_GID: u64 = 11;
pub const PRODUCTS_GID: u64 = 22;
pub const ADDONS_GID: u64 = 33;

pub const CATEGORIES_CSV: &str = "\"Product Categories\",\"Add-on Categories\"\n\
\"Widgets\",\"Lenses\"\n\
\"Gadgets\",\"\"\n";

pub const PRODUCTS_CSV: &str = "\"Product Category\",\"Manufacturer\",\"Product SKU\",\"Product Name\",\"Product Description\",\"Our Price\"\n\
\"Widgets\",\"Acme\",\"SKU100\",\"Widget\",\"A widget\",\"$19.99\"\n\
\"Gadgets\",\"Globex\",\"SKU200\",\"ガジェット\",\"Large, heavy\",\"$1,234.50\"\n";

pub const ADDONS_CSV: &str = "\"Add-on Category\",\"Manufacturer\",\"Add-on SKU\",\"Add-on Name\",\"Add-on Description\",\"Our Price\",\"Compatible Parent SKUs\",\"Incompatible Add-on SKUs\"\n\
\"Lenses\",\"Acme\",\"ADD1\",\"Wide lens\",\"Wide angle\",\"€99\",\"SKU1, SKU2\",\"\"\n\
\"Lenses\",\"Acme\",\"ADD2\",\"Tele lens\",\"Telephoto\",\"$150\",\"SKU100\",\"ADD1\"\n";

pub struct MockSheetServer {
    pub base_url: String,
    /// 受信したリクエストライン（到着順）
    pub requests: Arc<Mutex<Vec<String>>>,
    handle: JoinHandle<()>,
}

impl MockSheetServer {
    pub async fn start(routes: HashMap<u64, (u16, String)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind失敗");
        let addr = listener.local_addr().expect("アドレス取得失敗");
        let routes = Arc::new(routes);
        let requests = Arc::new(Mutex::new(Vec::new()));

        let log = requests.clone();
        let handle = tokio::spawn(async move {
            loop {
                let Ok((stream, _)) = listener.accept().await else {
                    break;
                };
                let routes = routes.clone();
                let log = log.clone();
                tokio::spawn(async move {
                    let _ = handle_connection(stream, &routes, &log).await;
                });
            }
        });

        Self {
            base_url: format!("http://{}", addr),
            requests,
            handle,
        }
    }

    /// 3枚とも200で返す標準構成
    pub async fn with_default_sheets() -> Self {
        Self::start(routes(&[
            (CATEGORIES_GID, 200, CATEGORIES_CSV),
            (PRODUCTS_GID, 200, PRODUCTS_CSV),
            (ADDONS_GID, 200, ADDONS_CSV),
        ]))
        .await
    }

    pub fn request_lines(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl Drop for MockSheetServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

pub fn routes(entries: &[(u64, u16, &str)]) -> HashMap<u64, (u16, String)> {
    entries
        .iter()
        .map(|(gid, status, body)| (*gid, (*status, body.to_string())))
        .collect()
}

async fn handle_connection(
    mut stream: TcpStream,
    routes: &HashMap<u64, (u16, String)>,
    log: &Mutex<Vec<String>>,
) -> std::io::Result<()> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        let n = stream.read(&mut chunk).await?;
        if n == 0 {
            return Ok(());
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    let head = String::from_utf8_lossy(&buf);
    let request_line = head.lines().next().unwrap_or_default().to_string();
    log.lock().unwrap().push(request_line.clone());

    let gid = request_line
        .split_whitespace()
        .nth(1)
        .and_then(|target| target.split_once('?'))
        .and_then(|(_, query)| {
            query
                .split('&')
                .find_map(|pair| pair.strip_prefix("gid="))
                .and_then(|v| v.parse::<u64>().ok())
        });

    let (status, body) = gid
        .and_then(|gid| routes.get(&gid).cloned())
        .unwrap_or((404, "Not Found".to_string()));

    let reason = match status {
        200 => "OK",
        404 => "Not Found",
        _ => "Error",
    };
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: text/csv; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        reason,
        body.len(),
        body
    );
    stream.write_all(response.as_bytes()).await?;
    stream.shutdown().await
}
