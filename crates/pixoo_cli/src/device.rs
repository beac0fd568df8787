use pixoo_render::{FramePayload, Transport, TransportError};
use serde_json::{json, Value};

/// JSON-over-HTTP client for the device's `/post` command endpoint.
pub struct DeviceClient {
    agent: ureq::Agent,
    url: String,
}

impl DeviceClient {
    pub fn new(address: &str) -> Self {
        Self { agent: ureq::Agent::new(), url: format!("http://{address}/post") }
    }

    fn post(&self, command: Value) -> Result<Value, TransportError> {
        let response = self
            .agent
            .post(&self.url)
            .send_json(&command)
            .map_err(|err| TransportError::new(err.to_string()))?;

        let text = response
            .into_string()
            .map_err(|err| TransportError::new(format!("unreadable response body: {err}")))?;

        // The device sometimes answers with a bare string; only a JSON body
        // with a non-zero error_code counts as failure.
        match serde_json::from_str::<Value>(&text) {
            Ok(body) => {
                let code = body.get("error_code").and_then(Value::as_i64).unwrap_or(0);
                if code != 0 {
                    return Err(TransportError::new(format!("device error_code {code}")));
                }
                Ok(body)
            },
            Err(_) => Ok(Value::String(text)),
        }
    }

    pub fn set_brightness(&self, brightness: u8) -> Result<(), TransportError> {
        self.post(json!({ "Command": "Channel/SetBrightness", "Brightness": brightness }))?;
        Ok(())
    }

    /// 0 faces, 1 cloud, 2 visualizer, 3 custom, 4 black screen.
    pub fn set_channel(&self, index: u8) -> Result<(), TransportError> {
        self.post(json!({ "Command": "Channel/SetIndex", "SelectIndex": index }))?;
        Ok(())
    }

    pub fn set_screen_on(&self, on: bool) -> Result<(), TransportError> {
        self.post(json!({ "Command": "Channel/OnOffScreen", "OnOff": u8::from(on) }))?;
        Ok(())
    }

    pub fn clear_remote_text(&self) -> Result<(), TransportError> {
        self.post(json!({ "Command": "Draw/ClearHttpText" }))?;
        Ok(())
    }
}

impl Transport for DeviceClient {
    fn send_frame(&mut self, frame: &FramePayload) -> Result<(), TransportError> {
        self.post(json!({
            "Command": "Draw/SendHttpGif",
            "PicNum": frame.pic_num,
            "PicWidth": frame.pic_width,
            "PicOffset": frame.pic_offset,
            "PicID": frame.pic_id,
            "PicSpeed": frame.pic_speed_ms,
            "PicData": frame.pic_data,
        }))?;
        Ok(())
    }

    fn reset_frame_sequence(&mut self) -> Result<(), TransportError> {
        self.post(json!({ "Command": "Draw/ResetHttpGifId" }))?;
        Ok(())
    }
}
