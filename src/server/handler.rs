//! Camera command handling
//!
//! Terminates `COMMAND_LONG` messages addressed to camera components.
//!
//! Every handled command follows the same pacing:
//!
//! ```text
//!   peer                         camera
//!    |--- COMMAND_LONG ------------>|
//!    |<-- COMMAND_ACK --------------|
//!    |          settle interval     |
//!    |<-- payload #1 ---------------|
//!    |          settle interval     |
//!    |<-- payload #2 ---------------|
//! ```
//!
//! The settle interval suspends the handler, and with it the router's
//! dispatch, for its whole duration.

use std::time::Duration;

use crate::protocol::constants::*;
use crate::protocol::{CommandAck, CommandLong, Message, VideoStreamInformation};
use crate::router::{Disposition, HandlerFuture, ProtocolHandler, RouteSystem, SparseAddress};

/// Message ids this handler is registered for
pub const PROTOCOL_TABLE: [u32; 1] = [MAVLINK_MSG_ID_COMMAND_LONG];

/// Protocol handler for the camera command set
#[derive(Debug, Clone)]
pub struct CameraCommandHandler {
    settle: Duration,
}

impl ProtocolHandler for CameraCommandHandler {
    fn handle<'a>(
        &'a self,
        route: &'a RouteSystem,
        message: &'a Message,
        from: SparseAddress,
    ) -> HandlerFuture<'a> {
        Box::pin(async move {
            if let Message::CommandLong(cmd) = message {
                self.command_long_handler(route, cmd, from).await;
            }
            // Consumption, not command success
            Disposition::Accepted
        })
    }
}

impl CameraCommandHandler {
    pub fn new(settle: Duration) -> Self {
        Self { settle }
    }

    /// Handle one command.
    ///
    /// Returns the outcome of the command itself. Commands for other
    /// components, for absent cameras and unknown commands all report false.
    pub async fn command_long_handler(
        &self,
        route: &RouteSystem,
        cmd: &CommandLong,
        from: SparseAddress,
    ) -> bool {
        let comp_id = cmd.target_component;
        if !is_camera_component(comp_id) {
            return false;
        }

        tracing::info!(
            system = cmd.target_system,
            component = comp_id,
            command = cmd.command,
            "Command received"
        );

        let present = route.bus().has_component(comp_id);
        if !present {
            tracing::info!(component = comp_id, "Camera not present");
            return false;
        }

        match cmd.command {
            MAV_CMD_REQUEST_CAMERA_INFORMATION => {
                self.handle_request_camera_info(route, cmd, from).await
            }
            MAV_CMD_REQUEST_VIDEO_STREAM_INFORMATION => {
                self.handle_request_video_stream_info(route, cmd, from).await
            }
            MAV_CMD_VIDEO_START_STREAMING => {
                self.handle_video_start_streaming(route, cmd, from).await
            }
            MAV_CMD_VIDEO_STOP_STREAMING => {
                self.handle_video_stop_streaming(route, cmd, from).await
            }
            command if UNSUPPORTED_CAMERA_COMMANDS.contains(&command) => {
                self.send_ack(route, cmd, false, from);
                tracing::info!(component = comp_id, command, "Camera command not supported");
                false
            }
            command => {
                tracing::info!(component = comp_id, command, "Command unhandled");
                false
            }
        }
    }

    /// `MAV_CMD_REQUEST_CAMERA_INFORMATION`
    ///
    /// param1 of zero only probes for protocol support.
    async fn handle_request_camera_info(
        &self,
        route: &RouteSystem,
        cmd: &CommandLong,
        from: SparseAddress,
    ) -> bool {
        if cmd.param1_is_zero() {
            self.send_ack(route, cmd, true, from);
            return true;
        }

        let info = route
            .bus()
            .media(cmd.target_component)
            .map(|mc| mc.caps_info().to_message());

        self.send_ack(route, cmd, info.is_some(), from);
        self.settle().await;

        match info {
            Some(info) => {
                route.send(Message::CameraInformation(info), cmd.target_component, from);
                true
            }
            None => false,
        }
    }

    /// `MAV_CMD_REQUEST_VIDEO_STREAM_INFORMATION`
    ///
    /// param1 is the 1-based stream id, 0 requests every stream.
    async fn handle_request_video_stream_info(
        &self,
        route: &RouteSystem,
        cmd: &CommandLong,
        from: SparseAddress,
    ) -> bool {
        let stream_id = cmd.stream_id();

        // Build the replies up front so no bus guard is held while waiting
        let replies: Option<Vec<VideoStreamInformation>> = {
            let bus = route.bus();
            bus.media(cmd.target_component).map(|mc| {
                // Bounded by MAX_STREAMS
                let Ok(count) = u8::try_from(mc.stream_count()) else {
                    return Vec::new();
                };
                if stream_id > 0 {
                    mc.stream(usize::from(stream_id) - 1)
                        .map(|s| vec![s.info().to_message(stream_id, count)])
                        .unwrap_or_default()
                } else {
                    mc.streams()
                        .zip(1..=count)
                        .map(|(s, id)| s.info().to_message(id, count))
                        .collect()
                }
            })
        };

        let Some(replies) = replies else {
            self.send_ack(route, cmd, false, from);
            return false;
        };

        let result = !replies.is_empty();
        self.send_ack(route, cmd, result, from);

        for (n, reply) in replies.into_iter().enumerate() {
            self.settle().await;
            tracing::debug!(
                component = cmd.target_component,
                stream = reply.stream_id,
                n,
                "Sending stream information"
            );
            route.send(Message::VideoStreamInformation(reply), cmd.target_component, from);
        }
        if !result {
            self.settle().await;
        }

        result
    }

    /// `MAV_CMD_VIDEO_START_STREAMING`
    ///
    /// param1 is the 1-based stream id, 0 starts every stream.
    async fn handle_video_start_streaming(
        &self,
        route: &RouteSystem,
        cmd: &CommandLong,
        from: SparseAddress,
    ) -> bool {
        let comp_id = cmd.target_component;
        let ok = route
            .bus()
            .media(comp_id)
            .is_some_and(|mc| mc.stream_count() > 0);

        self.send_ack(route, cmd, ok, from);
        self.settle().await;

        if !ok {
            return false;
        }

        let stream_id = cmd.stream_id();
        let mut bus = route.bus_mut();
        let Some(mc) = bus.media_mut(comp_id) else {
            return false;
        };

        if stream_id > 0 {
            mc.start_stream(usize::from(stream_id) - 1)
        } else {
            mc.start_all()
        }
    }

    /// `MAV_CMD_VIDEO_STOP_STREAMING`
    ///
    /// param1 is the 1-based stream id, 0 stops every stream.
    async fn handle_video_stop_streaming(
        &self,
        route: &RouteSystem,
        cmd: &CommandLong,
        from: SparseAddress,
    ) -> bool {
        let comp_id = cmd.target_component;
        let ok = route.bus().media(comp_id).is_some();

        self.send_ack(route, cmd, ok, from);
        self.settle().await;

        if !ok {
            return false;
        }

        let stream_id = cmd.stream_id();
        let mut bus = route.bus_mut();
        let Some(mc) = bus.media_mut(comp_id) else {
            return false;
        };

        if stream_id > 0 {
            mc.stop_stream(usize::from(stream_id) - 1)
        } else {
            mc.stop_all()
        }
    }

    fn send_ack(&self, route: &RouteSystem, cmd: &CommandLong, ok: bool, from: SparseAddress) {
        let ack = CommandAck {
            command: cmd.command,
            result: ok.into(),
            target_system: from.group_id,
            target_component: from.instance_id,
        };
        route.send(Message::CommandAck(ack), cmd.target_component, from);
    }

    async fn settle(&self) {
        tokio::time::sleep(self.settle).await;
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use tokio::time::Instant;

    use super::*;
    use crate::media::{MediaCapsInfo, MediaComponent, StreamInfo, Worker};
    use crate::protocol::MavResult;
    use crate::router::{Component, MessageSink, OutboundPacket};
    use crate::scheduler::ManualScheduler;
    use crate::server::{VideoServer, VideoServerConfig};

    const GCS: SparseAddress = SparseAddress {
        group_id: 255,
        instance_id: 190,
    };

    /// Records every packet with the (paused) clock time it was sent at
    #[derive(Default)]
    struct TimedSink {
        packets: Mutex<Vec<(Instant, OutboundPacket)>>,
    }

    impl MessageSink for TimedSink {
        fn send(&self, packet: OutboundPacket) {
            self.packets.lock().unwrap().push((Instant::now(), packet));
        }
    }

    impl TimedSink {
        fn take(&self) -> Vec<(Instant, OutboundPacket)> {
            std::mem::take(&mut *self.packets.lock().unwrap())
        }
    }

    struct Fixture {
        route: Arc<RouteSystem>,
        sink: Arc<TimedSink>,
        scheduler: Arc<ManualScheduler>,
        server: VideoServer,
    }

    impl Fixture {
        fn new() -> Self {
            let sink = Arc::new(TimedSink::default());
            let route = Arc::new(RouteSystem::new(1, sink.clone()));
            let mut server = VideoServer::new(VideoServerConfig::default());
            server.init(route.clone()).unwrap();

            Self {
                route,
                sink,
                scheduler: Arc::new(ManualScheduler::new()),
                server,
            }
        }

        /// Add a camera whose streams have workers where `workers[i]` is true
        fn add_camera(&mut self, workers: &[bool]) -> u8 {
            let caps = MediaCapsInfo {
                time_boot_ms: 5,
                vendor_name: "Acme".into(),
                model_name: "Eye-2".into(),
                resolution_h: 1920,
                resolution_v: 1080,
                ..Default::default()
            };
            let mut mc = MediaComponent::new(caps, self.scheduler.clone());
            for (i, &has_worker) in workers.iter().enumerate() {
                let worker: Option<Worker> = has_worker.then(|| {
                    let worker: Worker = Arc::new(|_info: &StreamInfo| {});
                    worker
                });
                let info = StreamInfo::new(format!("cam{}", i + 1), format!("udp://0.0.0.0:{}", 5600 + i))
                    .framerate(30.0);
                mc.register_stream(info, worker).unwrap();
            }
            self.server.add_media_component(mc).unwrap()
        }

        async fn command(&self, target: u8, command: u16, param1: f32) -> bool {
            let cmd = CommandLong::new(1, target, command).with_param1(param1);
            self.server
                .handler()
                .command_long_handler(&self.route, &cmd, GCS)
                .await
        }

        fn running(&self, id: u8) -> Vec<bool> {
            self.server
                .with_media_component(id, |mc| mc.streams().map(|s| s.is_running()).collect())
                .unwrap()
        }
    }

    /// One settle interval, allowing for timer granularity
    fn assert_settled(gap: Duration) {
        assert!(
            gap >= SETTLE_INTERVAL && gap < SETTLE_INTERVAL * 2,
            "unexpected gap {:?}",
            gap
        );
    }

    fn ack(packet: &OutboundPacket) -> &CommandAck {
        match &packet.message {
            Message::CommandAck(ack) => ack,
            other => panic!("expected ack, got {:?}", other),
        }
    }

    fn stream_info(packet: &OutboundPacket) -> &VideoStreamInformation {
        match &packet.message {
            Message::VideoStreamInformation(info) => info,
            other => panic!("expected stream information, got {:?}", other),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_dispatch_always_accepts() {
        let mut fx = Fixture::new();
        let id = fx.add_camera(&[true]);

        for target in [1, id, MAV_COMP_ID_CAMERA6] {
            let msg = Message::CommandLong(CommandLong::new(1, target, MAV_CMD_VIDEO_STOP_STREAMING));
            assert_eq!(fx.route.dispatch(msg, GCS).await, Disposition::Accepted);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_target_outside_camera_range_ignored() {
        let mut fx = Fixture::new();
        fx.add_camera(&[true]);

        for target in [0, 1, MAV_COMP_ID_CAMERA - 1, MAV_COMP_ID_CAMERA6 + 1, 255] {
            assert!(!fx.command(target, MAV_CMD_REQUEST_CAMERA_INFORMATION, 1.0).await);
        }
        assert!(fx.sink.take().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_absent_camera_gets_no_ack() {
        let mut fx = Fixture::new();
        fx.add_camera(&[true]);

        assert!(!fx.command(MAV_COMP_ID_CAMERA2, MAV_CMD_VIDEO_START_STREAMING, 0.0).await);
        assert!(!fx.command(MAV_COMP_ID_CAMERA2, MAV_CMD_IMAGE_START_CAPTURE, 0.0).await);
        assert!(fx.sink.take().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_unsupported_command_nacked() {
        let mut fx = Fixture::new();
        let id = fx.add_camera(&[true]);

        for command in UNSUPPORTED_CAMERA_COMMANDS {
            assert!(!fx.command(id, command, 0.0).await);

            let packets = fx.sink.take();
            assert_eq!(packets.len(), 1);
            let (_, packet) = &packets[0];
            assert_eq!(packet.component_id, id);
            assert_eq!(packet.target, GCS);
            assert_eq!(
                ack(packet),
                &CommandAck {
                    command,
                    result: MavResult::Denied,
                    target_system: GCS.group_id,
                    target_component: GCS.instance_id,
                }
            );
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_unknown_command_dropped() {
        let mut fx = Fixture::new();
        let id = fx.add_camera(&[true]);

        // MAV_CMD_COMPONENT_ARM_DISARM
        assert!(!fx.command(id, 400, 1.0).await);
        assert!(fx.sink.take().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_camera_info_probe() {
        let mut fx = Fixture::new();
        let id = fx.add_camera(&[]);

        for param1 in [0.0, -0.0, 1e-9] {
            let started = Instant::now();
            assert!(fx.command(id, MAV_CMD_REQUEST_CAMERA_INFORMATION, param1).await);
            assert_eq!(started.elapsed(), Duration::ZERO);

            let packets = fx.sink.take();
            assert_eq!(packets.len(), 1);
            assert_eq!(ack(&packets[0].1).result, MavResult::Accepted);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_camera_info_payload_after_settle() {
        let mut fx = Fixture::new();
        let id = fx.add_camera(&[]);

        let started = Instant::now();
        assert!(fx.command(id, MAV_CMD_REQUEST_CAMERA_INFORMATION, 1.0).await);

        let packets = fx.sink.take();
        assert_eq!(packets.len(), 2);

        let (ack_at, ack_packet) = &packets[0];
        assert_eq!(*ack_at, started);
        assert_eq!(ack(ack_packet).result, MavResult::Accepted);

        let (info_at, info_packet) = &packets[1];
        assert_settled(info_at.duration_since(*ack_at));
        assert_eq!(info_packet.system_id, 1);
        assert_eq!(info_packet.component_id, id);
        match &info_packet.message {
            Message::CameraInformation(info) => {
                assert_eq!(info.time_boot_ms, 5000);
                assert_eq!(info.vendor_name, "Acme");
                assert_eq!(info.model_name, "Eye-2");
                assert_eq!((info.resolution_h, info.resolution_v), (1920, 1080));
            }
            other => panic!("expected camera information, got {:?}", other),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_camera_info_non_media_component() {
        struct Gimbal;

        impl Component for Gimbal {
            fn id(&self) -> u8 {
                MAV_COMP_ID_CAMERA
            }

            fn set_id(&mut self, _id: u8) {}
        }

        let fx = Fixture::new();
        fx.route.bus_mut().add_component(Box::new(Gimbal)).unwrap();

        assert!(!fx.command(MAV_COMP_ID_CAMERA, MAV_CMD_REQUEST_CAMERA_INFORMATION, 1.0).await);

        let packets = fx.sink.take();
        assert_eq!(packets.len(), 1);
        assert_eq!(ack(&packets[0].1).result, MavResult::Denied);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stream_info_all_fans_out_in_order() {
        let mut fx = Fixture::new();
        let id = fx.add_camera(&[true, false, true]);

        let started = Instant::now();
        assert!(fx.command(id, MAV_CMD_REQUEST_VIDEO_STREAM_INFORMATION, 0.0).await);

        let packets = fx.sink.take();
        assert_eq!(packets.len(), 4);
        assert_eq!(ack(&packets[0].1).result, MavResult::Accepted);
        assert_eq!(packets[0].0, started);

        for (n, (at, packet)) in packets[1..].iter().enumerate() {
            let info = stream_info(packet);
            assert_eq!(info.stream_id as usize, n + 1);
            assert_eq!(info.count, 3);
            assert_eq!(info.name, format!("cam{}", n + 1));
            assert_settled(at.duration_since(packets[n].0));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_stream_info_single() {
        let mut fx = Fixture::new();
        let id = fx.add_camera(&[true, true, true]);

        assert!(fx.command(id, MAV_CMD_REQUEST_VIDEO_STREAM_INFORMATION, 2.0).await);

        let packets = fx.sink.take();
        assert_eq!(packets.len(), 2);
        assert_eq!(ack(&packets[0].1).result, MavResult::Accepted);

        let info = stream_info(&packets[1].1);
        assert_eq!(info.stream_id, 2);
        assert_eq!(info.count, 3);
        assert_eq!(info.uri, "udp://0.0.0.0:5601");
        assert_eq!(info.framerate, 30.0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stream_info_missing_stream() {
        let mut fx = Fixture::new();
        let id = fx.add_camera(&[true]);

        let started = Instant::now();
        assert!(!fx.command(id, MAV_CMD_REQUEST_VIDEO_STREAM_INFORMATION, 5.0).await);
        assert_settled(started.elapsed());

        let packets = fx.sink.take();
        assert_eq!(packets.len(), 1);
        assert_eq!(ack(&packets[0].1).result, MavResult::Denied);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stream_info_all_without_streams() {
        let mut fx = Fixture::new();
        let id = fx.add_camera(&[]);

        assert!(!fx.command(id, MAV_CMD_REQUEST_VIDEO_STREAM_INFORMATION, 0.0).await);

        let packets = fx.sink.take();
        assert_eq!(packets.len(), 1);
        assert_eq!(ack(&packets[0].1).result, MavResult::Denied);
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_streaming_requires_streams() {
        let mut fx = Fixture::new();
        let id = fx.add_camera(&[]);

        assert!(!fx.command(id, MAV_CMD_VIDEO_START_STREAMING, 0.0).await);

        let packets = fx.sink.take();
        assert_eq!(packets.len(), 1);
        assert_eq!(ack(&packets[0].1).result, MavResult::Denied);
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_streaming_single() {
        let mut fx = Fixture::new();
        let id = fx.add_camera(&[true, true]);

        assert!(fx.command(id, MAV_CMD_VIDEO_START_STREAMING, 2.0).await);
        assert_eq!(fx.running(id), [false, true]);

        // Stream that does not exist: positive ack, negative result
        assert!(!fx.command(id, MAV_CMD_VIDEO_START_STREAMING, 3.0).await);
        let packets = fx.sink.take();
        assert_eq!(packets.len(), 2);
        assert!(packets.iter().all(|(_, p)| ack(p).result == MavResult::Accepted));
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_all_does_not_short_circuit() {
        let mut fx = Fixture::new();
        let id = fx.add_camera(&[false, true, true]);

        assert!(!fx.command(id, MAV_CMD_VIDEO_START_STREAMING, 0.0).await);
        assert_eq!(fx.running(id), [false, true, true]);
        assert_eq!(fx.scheduler.added(), 2);

        let packets = fx.sink.take();
        assert_eq!(packets.len(), 1);
        assert_eq!(ack(&packets[0].1).result, MavResult::Accepted);
    }

    #[tokio::test(start_paused = true)]
    async fn test_streaming_commands_act_after_settle() {
        let mut fx = Fixture::new();
        let id = fx.add_camera(&[true, true]);

        for (command, before, after) in [
            (MAV_CMD_VIDEO_START_STREAMING, [false, false], [true, true]),
            (MAV_CMD_VIDEO_STOP_STREAMING, [true, true], [false, false]),
        ] {
            let started = Instant::now();

            // Runs once the handler is parked in its settle interval
            let at_ack = async {
                while fx.sink.packets.lock().unwrap().is_empty() {
                    tokio::task::yield_now().await;
                }
                (Instant::now(), fx.running(id))
            };
            let (ok, (acked_at, running_at_ack)) =
                tokio::join!(fx.command(id, command, 0.0), at_ack);

            assert!(ok);
            assert_eq!(acked_at, started);
            assert_eq!(running_at_ack, before);
            assert_settled(started.elapsed());
            assert_eq!(fx.running(id), after);

            let packets = fx.sink.take();
            assert_eq!(packets.len(), 1);
            assert_eq!(packets[0].0, started);
            assert_eq!(ack(&packets[0].1).command, command);
            assert_eq!(ack(&packets[0].1).result, MavResult::Accepted);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_streaming_without_streams() {
        let mut fx = Fixture::new();
        let id = fx.add_camera(&[]);

        assert!(fx.command(id, MAV_CMD_VIDEO_STOP_STREAMING, 0.0).await);
        assert!(!fx.command(id, MAV_CMD_VIDEO_STOP_STREAMING, 1.0).await);

        let packets = fx.sink.take();
        assert_eq!(packets.len(), 2);
        assert!(packets.iter().all(|(_, p)| ack(p).result == MavResult::Accepted));
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_then_stop_all_streams() {
        let mut fx = Fixture::new();
        let id = fx.add_camera(&[true, true]);
        assert_eq!(id, MAV_COMP_ID_CAMERA);
        fx.server.start().unwrap();

        let start = Message::CommandLong(CommandLong::new(1, id, MAV_CMD_VIDEO_START_STREAMING));
        assert_eq!(fx.route.dispatch(start, GCS).await, Disposition::Accepted);

        let packets = fx.sink.take();
        assert_eq!(packets.len(), 1);
        assert_eq!(ack(&packets[0].1).command, MAV_CMD_VIDEO_START_STREAMING);
        assert_eq!(ack(&packets[0].1).result, MavResult::Accepted);
        assert_eq!(fx.running(id), [true, true]);

        // Workers run on scheduler ticks
        assert_eq!(fx.scheduler.tick(), 2);

        let stop = Message::CommandLong(CommandLong::new(1, id, MAV_CMD_VIDEO_STOP_STREAMING));
        assert_eq!(fx.route.dispatch(stop, GCS).await, Disposition::Accepted);

        let packets = fx.sink.take();
        assert_eq!(packets.len(), 1);
        assert_eq!(ack(&packets[0].1).command, MAV_CMD_VIDEO_STOP_STREAMING);
        assert_eq!(ack(&packets[0].1).result, MavResult::Accepted);
        assert_eq!(fx.running(id), [false, false]);
        assert_eq!(fx.scheduler.task_count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dispatch_is_serialised() {
        let mut fx = Fixture::new();
        let id = fx.add_camera(&[true, true]);

        let info = Message::CommandLong(
            CommandLong::new(1, id, MAV_CMD_REQUEST_VIDEO_STREAM_INFORMATION),
        );
        let probe = Message::CommandLong(
            CommandLong::new(1, id, MAV_CMD_REQUEST_CAMERA_INFORMATION),
        );

        let (a, b) = tokio::join!(fx.route.dispatch(info, GCS), fx.route.dispatch(probe, GCS));
        assert_eq!((a, b), (Disposition::Accepted, Disposition::Accepted));

        // The probe's ack waits for the whole fan-out
        let packets = fx.sink.take();
        let kinds: Vec<u32> = packets.iter().map(|(_, p)| p.message.msg_id()).collect();
        assert_eq!(
            kinds,
            vec![
                MAVLINK_MSG_ID_COMMAND_ACK,
                MAVLINK_MSG_ID_VIDEO_STREAM_INFORMATION,
                MAVLINK_MSG_ID_VIDEO_STREAM_INFORMATION,
                MAVLINK_MSG_ID_COMMAND_ACK,
            ]
        );
    }
}
