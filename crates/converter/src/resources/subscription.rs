use fhir_hapi as hapi;
use fhir_proto as proto;

resource! {
    hapi::Subscription => proto::Subscription {
        status, contact, end, reason, criteria, error, channel,
    }
}

composite! {
    hapi::SubscriptionChannel => proto::subscription::Channel {
        extension, modifier_extension, r#type, endpoint, payload, header,
    }
}

#[cfg(test)]
mod tests {
    use crate::{ConverterConfig, ToHapi, ToProto};
    use fhir_hapi::{
        CodeType, Enumeration, StringType, Subscription, SubscriptionChannel,
        SubscriptionChannelType, SubscriptionStatus, UrlType,
    };
    use fhir_proto::subscription_channel_type_code;
    use pretty_assertions::assert_eq;

    #[test]
    fn rest_hook_subscription_round_trips() {
        let subscription = Subscription {
            status: Some(Enumeration::new(SubscriptionStatus::Requested)),
            reason: Some(StringType::new("Monitor new results")),
            criteria: Some(StringType::new("Observation?code=http://loinc.org|1975-2")),
            channel: Some(SubscriptionChannel {
                r#type: Some(Enumeration::new(SubscriptionChannelType::RestHook)),
                endpoint: Some(UrlType::new("https://example.org/hook")),
                payload: Some(CodeType::new("application/fhir+json")),
                header: vec![StringType::new("Authorization: Bearer secret-token")],
                ..SubscriptionChannel::default()
            }),
            ..Subscription::default()
        };
        let config = ConverterConfig::default();

        let proto = subscription.to_proto(&config).expect("to proto");
        let channel = proto.channel.as_ref().expect("channel");
        assert_eq!(
            channel.r#type.as_ref().map(|t| t.value),
            Some(subscription_channel_type_code::Value::RestHook as i32)
        );
        assert_eq!(channel.header.len(), 1);

        assert_eq!(proto.to_hapi(&config).expect("to hapi"), subscription);
    }
}
