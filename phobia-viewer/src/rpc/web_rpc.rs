use bevy::diagnostic::DiagnosticsStore;
use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use bevy::window::{MonitorSelection, PrimaryWindow, WindowMode};
use serde::{Deserialize, Serialize};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

#[cfg(target_arch = "wasm32")]
use web_sys::{MessageEvent, window};

use crate::engine::camera::transition::CameraTransition;
use crate::engine::core::frame_set::FrameSet;
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::systems::fps_tracking::smoothed_fps;

const JSONRPC_VERSION: &str = "2.0";

/// JSON-RPC 2.0 request structure.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcRequest {
    pub jsonrpc: String,
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
    pub id: Option<serde_json::Value>,
}

/// JSON-RPC 2.0 response structure.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RpcResponse {
    pub jsonrpc: String,
    pub result: Option<serde_json::Value>,
    pub error: Option<RpcError>,
    pub id: Option<serde_json::Value>,
}

impl RpcResponse {
    fn reply(id: serde_json::Value, result: Result<serde_json::Value, RpcError>) -> Self {
        let (result, error) = match result {
            Ok(value) => (Some(value), None),
            Err(error) => (None, Some(error)),
        };
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            result,
            error,
            id: Some(id),
        }
    }
}

/// JSON-RPC 2.0 notification structure for one-way communication.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RpcNotification {
    pub jsonrpc: String,
    pub method: String,
    pub params: serde_json::Value,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RpcError {
    pub code: i32,
    pub message: String,
    pub data: Option<serde_json::Value>,
}

impl RpcError {
    pub fn method_not_found(method: &str) -> Self {
        Self {
            code: -32601,
            message: "Method not found".to_string(),
            data: Some(serde_json::json!({ "method": method })),
        }
    }

    pub fn invalid_params(message: &str) -> Self {
        Self {
            code: -32602,
            message: message.to_string(),
            data: None,
        }
    }
}

/// Outgoing queue drained to the host page at the end of each frame.
#[derive(Resource, Default)]
pub struct WebRpcInterface {
    outgoing_notifications: Vec<RpcNotification>,
    outgoing_responses: Vec<RpcResponse>,
}

impl WebRpcInterface {
    /// Send notification to the host page without expecting a response.
    pub fn send_notification(&mut self, method: &str, params: serde_json::Value) {
        self.outgoing_notifications.push(RpcNotification {
            jsonrpc: JSONRPC_VERSION.to_string(),
            method: method.to_string(),
            params,
        });
    }

    fn queue_response(&mut self, response: RpcResponse) {
        self.outgoing_responses.push(response);
    }

    pub fn pending_notifications(&self) -> &[RpcNotification] {
        &self.outgoing_notifications
    }
}

pub struct WebRpcPlugin;

impl Plugin for WebRpcPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<WebRpcInterface>()
            .add_event::<IncomingRpcMessage>()
            .add_systems(
                Update,
                (process_incoming_messages, handle_rpc_messages)
                    .chain()
                    .in_set(FrameSet::Report),
            )
            .add_systems(Update, send_outgoing_messages.in_set(FrameSet::Flush));

        #[cfg(target_arch = "wasm32")]
        app.add_systems(Startup, setup_message_listener);
    }
}

#[cfg(target_arch = "wasm32")]
fn setup_message_listener(mut commands: Commands) {
    use std::sync::{Arc, Mutex};

    let message_queue: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let queue_clone = message_queue.clone();

    let closure = Closure::wrap(Box::new(move |event: MessageEvent| {
        if let Ok(data) = event.data().dyn_into::<js_sys::JsString>() {
            let message_str: String = data.into();
            if message_str.contains("jsonrpc") {
                if let Ok(mut queue) = queue_clone.lock() {
                    queue.push(message_str);
                }
            }
        }
    }) as Box<dyn FnMut(MessageEvent)>);

    match window() {
        Some(window) => {
            if let Err(err) =
                window.add_event_listener_with_callback("message", closure.as_ref().unchecked_ref())
            {
                error!("Failed to register message listener: {:?}", err);
            }
        }
        None => error!("Window object not available for message listener"),
    }

    // JS owns the closure from here on.
    closure.forget();
    commands.insert_resource(MessageQueue(message_queue));
}

// Only inserted by the wasm message listener.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
#[derive(Resource)]
struct MessageQueue(std::sync::Arc<std::sync::Mutex<Vec<String>>>);

#[derive(Event)]
struct IncomingRpcMessage {
    content: String,
}

fn process_incoming_messages(
    message_queue: Option<Res<MessageQueue>>,
    mut message_events: EventWriter<IncomingRpcMessage>,
) {
    let Some(queue_res) = message_queue else {
        return;
    };

    let messages = match queue_res.0.lock() {
        Ok(mut queue) => std::mem::take(&mut *queue),
        Err(_) => Vec::new(),
    };

    for content in messages {
        message_events.write(IncomingRpcMessage { content });
    }
}

/// Read-mostly view of the session that requests are answered from.
#[derive(SystemParam)]
pub struct RpcContext<'w, 's> {
    diagnostics: Res<'w, DiagnosticsStore>,
    loading_progress: Res<'w, LoadingProgress>,
    transition: Res<'w, CameraTransition>,
    windows: Query<'w, 's, &'static mut Window, With<PrimaryWindow>>,
}

fn handle_rpc_messages(
    mut events: EventReader<IncomingRpcMessage>,
    mut rpc_interface: ResMut<WebRpcInterface>,
    mut context: RpcContext,
) {
    for event in events.read() {
        match serde_json::from_str::<RpcRequest>(&event.content) {
            Ok(request) => {
                if let Some(response) =
                    handle_rpc_request(&request, &mut context, &mut rpc_interface)
                {
                    rpc_interface.queue_response(response);
                }
            }
            Err(parse_error) => {
                rpc_interface.send_notification(
                    "debug_message",
                    serde_json::json!({
                        "message": format!("Parse error: {}", parse_error)
                    }),
                );
            }
        }
    }
}

/// Answer a request. Notifications (no id) are still carried out but get no
/// response.
fn handle_rpc_request(
    request: &RpcRequest,
    context: &mut RpcContext,
    rpc_interface: &mut WebRpcInterface,
) -> Option<RpcResponse> {
    let result = match request.method.as_str() {
        "get_fps" => Ok(serde_json::json!({
            "fps": smoothed_fps(&context.diagnostics).unwrap_or(0.0) as f32
        })),
        "get_loading_progress" => Ok(loading_progress_json(&context.loading_progress)),
        "get_transition_phase" => Ok(transition_phase_json(&context.transition)),
        "set_fullscreen" => handle_set_fullscreen(&request.params, &mut context.windows),
        _ => {
            warn!("Unknown RPC method: {}", request.method);
            rpc_interface.send_notification(
                "debug_message",
                serde_json::json!({
                    "message": format!("Unknown method: {}", request.method)
                }),
            );
            Err(RpcError::method_not_found(&request.method))
        }
    };

    let id = request.id.clone()?;
    Some(RpcResponse::reply(id, result))
}

pub fn loading_progress_json(progress: &LoadingProgress) -> serde_json::Value {
    serde_json::json!({
        "loaded": progress.loaded,
        "total": progress.total,
        "complete": progress.complete,
        "failed": progress.failed,
    })
}

pub fn transition_phase_json(transition: &CameraTransition) -> serde_json::Value {
    serde_json::json!({
        "phase": transition.phase().name(),
        "progress": transition.progress(),
    })
}

fn handle_set_fullscreen(
    params: &serde_json::Value,
    windows: &mut Query<&mut Window, With<PrimaryWindow>>,
) -> Result<serde_json::Value, RpcError> {
    #[derive(Deserialize)]
    struct FullscreenParams {
        enabled: bool,
    }

    let parsed = serde_json::from_value::<FullscreenParams>(params.clone())
        .map_err(|_| RpcError::invalid_params("Expected boolean 'enabled' parameter"))?;

    let Ok(mut window) = windows.single_mut() else {
        return Err(RpcError::invalid_params("No primary window"));
    };
    window.mode = if parsed.enabled {
        WindowMode::BorderlessFullscreen(MonitorSelection::Current)
    } else {
        WindowMode::Windowed
    };

    Ok(serde_json::json!({ "fullscreen": parsed.enabled }))
}

fn send_outgoing_messages(mut rpc_interface: ResMut<WebRpcInterface>) {
    // Notifications first, then responses, to keep ordering stable.
    for notification in rpc_interface.outgoing_notifications.drain(..) {
        send_message_to_parent(&notification);
    }
    for response in rpc_interface.outgoing_responses.drain(..) {
        send_message_to_parent(&response);
    }
}

fn send_message_to_parent<T: Serialize>(message: &T) {
    #[cfg(target_arch = "wasm32")]
    {
        match serde_json::to_string(message) {
            Ok(json) => {
                let Some(window) = window() else {
                    error!("Window object not available");
                    return;
                };
                match window.parent().ok().flatten() {
                    Some(parent) => {
                        if let Err(e) = parent.post_message(&JsValue::from_str(&json), "*") {
                            error!("Failed to send message to parent: {:?}", e);
                        }
                    }
                    None => warn!("No parent window available for message transmission"),
                }
            }
            Err(e) => error!("Failed to serialize message: {}", e),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = message;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::camera::transition::CameraTransition;

    #[test]
    fn request_without_id_is_a_notification() {
        let request: RpcRequest =
            serde_json::from_str(r#"{"jsonrpc":"2.0","method":"get_fps"}"#).unwrap();
        assert_eq!(request.id, None);
        assert_eq!(request.params, serde_json::Value::Null);
    }

    #[test]
    fn reply_carries_error_or_result() {
        let ok = RpcResponse::reply(serde_json::json!(1), Ok(serde_json::json!({"a": 1})));
        assert_eq!(ok.result, Some(serde_json::json!({"a": 1})));
        assert_eq!(ok.error, None);

        let err = RpcResponse::reply(serde_json::json!(2), Err(RpcError::method_not_found("x")));
        assert_eq!(err.result, None);
        assert_eq!(err.error.map(|e| e.code), Some(-32601));
    }

    #[test]
    fn transition_phase_reports_waiting_at_start() {
        let json = transition_phase_json(&CameraTransition::default());
        assert_eq!(json["phase"], "waiting");
        assert_eq!(json["progress"], 0.0);
    }

    #[test]
    fn loading_progress_reports_counts() {
        let mut progress = LoadingProgress::new(5);
        progress.loaded = 2;
        let json = loading_progress_json(&progress);
        assert_eq!(json["loaded"], 2);
        assert_eq!(json["total"], 5);
        assert_eq!(json["complete"], false);
    }

    fn rpc_app() -> App {
        let mut app = App::new();
        app.init_resource::<DiagnosticsStore>()
            .insert_resource(LoadingProgress::new(5))
            .insert_resource(CameraTransition::default());
        crate::engine::core::frame_set::configure_frame_sets(&mut app);
        app.add_plugins(WebRpcPlugin);
        app
    }

    fn receive(app: &mut App, content: &str) {
        app.world_mut().send_event(IncomingRpcMessage {
            content: content.to_string(),
        });
    }

    #[test]
    fn report_notifications_leave_in_the_same_frame() {
        let mut app = rpc_app();
        app.add_systems(
            Update,
            (|mut rpc: ResMut<WebRpcInterface>| {
                rpc.send_notification("transition_phase", serde_json::json!({"phase": "done"}));
            })
            .in_set(FrameSet::Report),
        );

        app.update();

        let rpc = app.world().resource::<WebRpcInterface>();
        assert!(rpc.pending_notifications().is_empty());
        assert!(rpc.outgoing_responses.is_empty());
    }

    #[test]
    fn unknown_method_replies_with_error_and_debug_message() {
        let mut app = App::new();
        app.init_resource::<DiagnosticsStore>()
            .init_resource::<WebRpcInterface>()
            .insert_resource(LoadingProgress::new(5))
            .insert_resource(CameraTransition::default())
            .add_event::<IncomingRpcMessage>()
            .add_systems(Update, handle_rpc_messages);

        receive(&mut app, r#"{"jsonrpc":"2.0","method":"spin_faster","id":7}"#);
        app.update();

        let rpc = app.world().resource::<WebRpcInterface>();
        assert_eq!(rpc.outgoing_responses.len(), 1);
        let response = &rpc.outgoing_responses[0];
        assert_eq!(response.id, Some(serde_json::json!(7)));
        assert_eq!(response.error.as_ref().map(|e| e.code), Some(-32601));

        let debug: Vec<_> = rpc
            .pending_notifications()
            .iter()
            .filter(|n| n.method == "debug_message")
            .collect();
        assert_eq!(debug.len(), 1);
        assert_eq!(debug[0].params["message"], "Unknown method: spin_faster");
    }

    #[test]
    fn known_method_answers_from_session_state() {
        let mut app = App::new();
        app.init_resource::<DiagnosticsStore>()
            .init_resource::<WebRpcInterface>()
            .insert_resource(LoadingProgress::new(5))
            .insert_resource(CameraTransition::default())
            .add_event::<IncomingRpcMessage>()
            .add_systems(Update, handle_rpc_messages);

        receive(&mut app, r#"{"jsonrpc":"2.0","method":"get_transition_phase","id":"a"}"#);
        receive(&mut app, r#"{"jsonrpc":"2.0","method":"get_loading_progress"}"#);
        app.update();

        let rpc = app.world().resource::<WebRpcInterface>();
        assert_eq!(rpc.outgoing_responses.len(), 1);
        let result = rpc.outgoing_responses[0].result.clone().unwrap();
        assert_eq!(result["phase"], "waiting");
        assert!(rpc.pending_notifications().is_empty());
    }
}
