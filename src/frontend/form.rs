use crate::frontend::client::RoutingService;
use crate::frontend::outcome::RouteOutcome;
use crate::frontend::picker::{LocationPicker, SelectionChanged};
use crate::frontend::widget::MapWidget;
use crate::map::models::Coordinate;
use crate::routes::models::Endpoint;
use crate::routes::requests::RouteRequest;
use secrecy::SecretString;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::{mpsc, RwLock};

/// Two pickers ("Start Point" and "End Point") plus the outcome of the latest submission.
pub struct RouteForm<S, W>
where
    S: RoutingService + 'static,
    W: MapWidget,
{
    start_picker: LocationPicker<W>,
    end_picker: LocationPicker<W>,
    start: Option<Coordinate>,
    end: Option<Coordinate>,
    selections: mpsc::UnboundedReceiver<SelectionChanged>,
    service: Arc<S>,
    displayed: Arc<RwLock<Option<RouteOutcome>>>,
}

impl<S, W> RouteForm<S, W>
where
    S: RoutingService + 'static,
    W: MapWidget,
{
    pub fn new(
        service: S,
        start_widget: W,
        end_widget: W,
        api_key: Option<&SecretString>,
    ) -> Self {
        let (sender, selections) = mpsc::unbounded_channel();
        Self {
            start_picker: LocationPicker::new(
                Endpoint::Start,
                start_widget,
                api_key,
                sender.clone(),
            ),
            end_picker: LocationPicker::new(Endpoint::End, end_widget, api_key, sender),
            start: None,
            end: None,
            selections,
            service: Arc::new(service),
            displayed: Arc::new(RwLock::new(None)),
        }
    }

    /// The picker that widget events for `slot` should be routed to.
    pub fn picker_mut(&mut self, slot: Endpoint) -> &mut LocationPicker<W> {
        match slot {
            Endpoint::Start => &mut self.start_picker,
            Endpoint::End => &mut self.end_picker,
        }
    }

    pub fn picker(&self, slot: Endpoint) -> &LocationPicker<W> {
        match slot {
            Endpoint::Start => &self.start_picker,
            Endpoint::End => &self.end_picker,
        }
    }

    /// What would be sent if the form were submitted right now.
    pub fn request(&mut self) -> RouteRequest {
        self.apply_pending_selections();
        RouteRequest {
            start: self.start,
            end: self.end,
        }
    }

    /// Sends the current selections to the routing service.
    ///
    /// The request is captured when this is called; the returned future does not borrow the
    /// form, so several submissions may be in flight at once. Whichever resolves last decides
    /// what [`displayed`](Self::displayed) shows.
    pub fn submit(&mut self) -> impl Future<Output = RouteOutcome> + Send + 'static {
        let request = self.request();
        let service = Arc::clone(&self.service);
        let displayed = Arc::clone(&self.displayed);
        tracing::info!(task = "route_submitted", start = ?request.start, end = ?request.end);
        async move {
            let result = service.create_route(&request).await;
            match &result {
                Ok(response) => {
                    tracing::info!(task = "route_outcome", message = %response.message);
                }
                Err(err) => tracing::warn!(task = "route_outcome", error = %err.detail()),
            }
            let outcome = RouteOutcome::from(result);
            *displayed.write().await = Some(outcome.clone());
            outcome
        }
    }

    /// Text currently shown under the form, if any submission has completed.
    pub async fn displayed(&self) -> Option<String> {
        self.displayed
            .read()
            .await
            .as_ref()
            .map(RouteOutcome::to_string)
    }

    fn apply_pending_selections(&mut self) {
        while let Ok(SelectionChanged { slot, coordinate }) = self.selections.try_recv() {
            match slot {
                Endpoint::Start => self.start = coordinate,
                Endpoint::End => self.end = coordinate,
            }
        }
    }
}
