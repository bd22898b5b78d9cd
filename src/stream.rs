use crate::errors::Result;
use crate::models::SubscribeRequest;
use futures::{SinkExt, Stream, StreamExt};
use std::io::Write;
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::{self, Message};
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};
use tracing::warn;
use url::Url;

/// A connected client-side WebSocket.
pub type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Open the WebSocket connection. DNS, TLS or upgrade failure is fatal;
/// there is no retry.
pub async fn connect(ws_url: &str) -> Result<WsStream> {
    let url = Url::parse(ws_url)?;
    let (ws_stream, _resp) = connect_async(url).await?;
    Ok(ws_stream)
}

/// Send the subscription request as a single text frame. This is the only
/// outbound frame for the lifetime of the connection.
pub async fn subscribe(ws: &mut WsStream, request: &SubscribeRequest) -> Result<()> {
    let payload = serde_json::to_string(request)?;
    ws.send(Message::Text(payload)).await?;
    Ok(())
}

/// Returns the inbound text frames as an asynchronous stream of raw strings.
///
/// Non-text frames are skipped, transport errors are logged and skipped, and
/// the stream ends once the connection is closed. No distinction is made
/// between a graceful close and an error close.
pub fn frames<S>(ws: S) -> impl Stream<Item = String>
where
    S: Stream<Item = tungstenite::Result<Message>>,
{
    ws.filter_map(|msg_res| async {
        match msg_res {
            Ok(msg) if msg.is_text() => match msg.into_text() {
                Ok(txt) => Some(txt),
                Err(e) => {
                    warn!(error = %e, "[WS] text extraction failed");
                    None
                }
            },
            Err(e) => {
                warn!(error = %e, "[WS] websocket message error");
                None
            }
            _ => None,
        }
    })
}

/// Connect, subscribe to the given channel, and return the notification
/// stream. The connection is owned by the returned stream and is dropped,
/// closing the socket, on every exit path.
pub async fn connect_and_stream(
    ws_url: &str,
    request: &SubscribeRequest,
) -> Result<impl Stream<Item = String>> {
    let mut ws = connect(ws_url).await?;
    subscribe(&mut ws, request).await?;
    Ok(frames(ws))
}

/// Drain the stream, writing every frame as one line to `out`, flushed per
/// frame. Returns once the stream ends.
pub async fn write_frames<S, W>(mut stream: S, out: &mut W) -> Result<()>
where
    S: Stream<Item = String> + Unpin,
    W: Write,
{
    while let Some(frame) = stream.next().await {
        writeln!(out, "{frame}")?;
        out.flush()?;
    }
    Ok(())
}
